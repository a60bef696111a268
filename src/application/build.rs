//! Expansion of extracted offers into output rows.

use chrono::{Local, NaiveDateTime};

use crate::domain::odds::scalar_text;
use crate::domain::{MarketKind, OddsTriple, OfferGrouping, OutputRecord};

/// Builds [`OutputRecord`]s for one sportsbook and sport.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    sportsbook: String,
    sport: String,
}

impl RecordBuilder {
    #[must_use]
    pub fn new(sportsbook: impl Into<String>, sport: impl Into<String>) -> Self {
        Self {
            sportsbook: sportsbook.into(),
            sport: sport.into(),
        }
    }

    /// Emit one record per triple, stamping each with the local wall clock.
    #[must_use]
    pub fn build(&self, league: Option<&str>, offers: &[OfferGrouping]) -> Vec<OutputRecord> {
        self.build_with_clock(league, offers, || Local::now().naive_local())
    }

    /// Like [`Self::build`], reading `retrievedAt` from `clock` once per record.
    pub fn build_with_clock<F>(
        &self,
        league: Option<&str>,
        offers: &[OfferGrouping],
        mut clock: F,
    ) -> Vec<OutputRecord>
    where
        F: FnMut() -> NaiveDateTime,
    {
        let mut records = Vec::new();
        for offer in offers {
            for group in &offer.groups {
                for triple in &group.triples {
                    records.push(OutputRecord {
                        sportsbook: self.sportsbook.clone(),
                        sport: self.sport.clone(),
                        league: league.map(str::to_owned),
                        event_name: offer.event.event_name.clone(),
                        game_time: offer.event.start_time.clone(),
                        market: group.kind,
                        retrieved_at: clock(),
                        bet_selection: selection_text(group.kind, triple),
                        price: triple.price.as_ref().and_then(scalar_text),
                        is_locked: offer.event.is_open.clone(),
                    });
                }
            }
        }
        records
    }
}

/// Selection column text: `label line` for totals and spreads, the label
/// alone for the money line. Absent parts are dropped along with their
/// separator.
#[must_use]
pub fn selection_text(kind: MarketKind, triple: &OddsTriple) -> String {
    let line = if kind.shows_line() {
        triple.line.as_ref().and_then(scalar_text)
    } else {
        None
    };

    match (triple.selection.as_deref(), line) {
        (Some(label), Some(line)) => format!("{label} {line}"),
        (Some(label), None) => label.to_owned(),
        (None, Some(line)) => line,
        (None, None) => String::new(),
    }
}
