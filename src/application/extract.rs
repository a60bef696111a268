//! Odds extraction from a raw event-group payload.
//!
//! Walks the first subcategory's offer list, collects one [`OddsTriple`] per
//! outcome in traversal order, and pairs offer *i* with event *i*. Missing
//! leaves only blank or shorten the affected groups; the only hard failure is
//! an unreachable offer list.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::odds::{is_truthy, scalar_text, EXPECTED_TRIPLES};
use crate::domain::path::{get_array, lookup};
use crate::domain::{EventContext, OddsTriple, OfferGrouping};
use crate::error::{Error, Result};

/// League name of the event group.
pub const LEAGUE_PATH: &str = "eventGroup.nameIdentifier";

/// Offer list of the first offer category's first subcategory.
pub const OFFERS_PATH: &str =
    "eventGroup.offerCategories.0.offerSubcategoryDescriptors.0.offerSubcategory.offers";

fn event_path(index: usize, field: &str) -> String {
    format!("eventGroup.events.{index}.{field}")
}

/// Result of decoding one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub league: Option<String>,
    /// One grouping per offer, in feed order.
    pub offers: Vec<OfferGrouping>,
}

impl Extraction {
    /// Offers whose triple count makes positional market inference suspect.
    #[must_use]
    pub fn flagged(&self) -> impl Iterator<Item = &OfferGrouping> {
        self.offers.iter().filter(|offer| !offer.is_well_formed())
    }
}

/// Decode `payload` into per-offer market groupings.
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] when the offer list is missing or is
/// not an array.
pub fn extract(payload: &Value) -> Result<Extraction> {
    let league = lookup(payload, LEAGUE_PATH).and_then(scalar_text);

    let offers = lookup(payload, OFFERS_PATH).ok_or_else(|| Error::MalformedPayload {
        reason: format!("offer list not found at {OFFERS_PATH}"),
    })?;
    let offers = offers.as_array().ok_or_else(|| Error::MalformedPayload {
        reason: format!("offer list at {OFFERS_PATH} is not an array"),
    })?;

    let offers: Vec<OfferGrouping> = offers
        .iter()
        .enumerate()
        .map(|(index, offer)| extract_offer(payload, index, offer, league.clone()))
        .collect();

    debug!(
        league = league.as_deref().unwrap_or_default(),
        offers = offers.len(),
        "Extracted offers"
    );

    Ok(Extraction { league, offers })
}

fn extract_offer(
    payload: &Value,
    index: usize,
    offer: &Value,
    league: Option<String>,
) -> OfferGrouping {
    let mut triples = Vec::new();
    let mut is_open = None;

    // Each offer is a list of periods; the last period's flag wins.
    for period in offer.as_array().map(Vec::as_slice).unwrap_or_default() {
        is_open = present(period, "isOpen");
        if let Some(outcomes) = get_array(period, "outcomes") {
            triples.extend(outcomes.iter().map(read_outcome));
        }
    }

    let event = EventContext {
        event_name: lookup(payload, &event_path(index, "nameIdentifier")).and_then(scalar_text),
        league,
        start_time: lookup(payload, &event_path(index, "startDate")).and_then(scalar_text),
        is_open,
    };

    let grouping = OfferGrouping::new(index, event, &triples);
    if !grouping.is_well_formed() {
        warn!(
            offer = index,
            triples = grouping.triple_count,
            expected = EXPECTED_TRIPLES,
            "Unexpected outcome count, market positions may be misassigned"
        );
    }
    grouping
}

fn read_outcome(outcome: &Value) -> OddsTriple {
    let selection = lookup(outcome, "participant")
        .filter(|participant| is_truthy(participant))
        .or_else(|| lookup(outcome, "label"))
        .and_then(scalar_text);

    OddsTriple {
        selection,
        line: present(outcome, "line"),
        price: present(outcome, "oddsAmerican"),
    }
}

fn present(outcome: &Value, key: &str) -> Option<Value> {
    lookup(outcome, key).filter(|v| !v.is_null()).cloned()
}
