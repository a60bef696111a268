//! Odds domain types.
//!
//! - [`OddsTriple`] - One outcome's selection, line and price
//! - [`MarketKind`] - Market inferred from a triple's position within its offer
//! - [`MarketGroup`] - A positional slice of an offer's triples
//! - [`EventContext`] - Event metadata shared by every record of one offer
//! - [`OfferGrouping`] - One offer's event plus its three market groups

use std::fmt;
use std::ops::Range;

use serde::Serialize;
use serde_json::Value;

/// Number of triples a complete offer yields: two totals, two spreads, two
/// money lines.
pub const EXPECTED_TRIPLES: usize = 6;

/// A single outcome as read from the feed, in traversal order.
///
/// Every field is optional; a missing value flows through to an empty output
/// field rather than failing the offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OddsTriple {
    /// Participant name, or the outcome label when no participant is given.
    pub selection: Option<String>,
    /// Handicap or total line, kept in its JSON form (`-5.5`, `220.5`).
    pub line: Option<Value>,
    /// American price (`-110`, `170`).
    pub price: Option<Value>,
}

impl OddsTriple {
    #[must_use]
    pub fn new(selection: Option<String>, line: Option<Value>, price: Option<Value>) -> Self {
        Self {
            selection,
            line,
            price,
        }
    }
}

/// Market kind, inferred solely from a triple's index within its offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    Totals,
    Spreads,
    MoneyLine,
}

impl MarketKind {
    /// Kinds in output order.
    pub const ALL: [Self; 3] = [Self::Totals, Self::Spreads, Self::MoneyLine];

    /// Name written to the `marketName` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Totals => "totals",
            Self::Spreads => "spreads",
            Self::MoneyLine => "money_line",
        }
    }

    /// Index range of this market within an offer holding `len` triples.
    ///
    /// The ranges are `[0, 2)`, `[2, 4)` and `[4, len)`, clamped to `len`.
    #[must_use]
    pub fn positions(self, len: usize) -> Range<usize> {
        let (start, end) = match self {
            Self::Totals => (0, 2),
            Self::Spreads => (2, 4),
            Self::MoneyLine => (4, len),
        };
        start.min(len)..end.clamp(start.min(len), len)
    }

    /// Whether the selection text carries the line after the label.
    #[must_use]
    pub const fn shows_line(self) -> bool {
        !matches!(self, Self::MoneyLine)
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triples of one market kind, in the order they appeared in the feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketGroup {
    pub kind: MarketKind,
    pub triples: Vec<OddsTriple>,
}

impl MarketGroup {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }
}

/// Split an offer's flat triple sequence into its three markets by position.
///
/// Boundaries never depend on content. A short offer yields short or empty
/// groups; a long one puts every extra triple into the money line.
#[must_use]
pub fn partition(triples: &[OddsTriple]) -> [MarketGroup; 3] {
    MarketKind::ALL.map(|kind| MarketGroup {
        kind,
        triples: triples[kind.positions(triples.len())].to_vec(),
    })
}

/// Event metadata fetched once per offer index.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventContext {
    pub event_name: Option<String>,
    pub league: Option<String>,
    pub start_time: Option<String>,
    /// Offer-level `isOpen` value from the last period read, kept as sent;
    /// the feed is not guaranteed to use a JSON boolean.
    pub is_open: Option<Value>,
}

/// One offer's worth of extracted odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferGrouping {
    /// Position in the feed's offer list, shared with the matching event.
    pub offer_index: usize,
    pub event: EventContext,
    pub groups: [MarketGroup; 3],
    /// Triples collected before partitioning.
    pub triple_count: usize,
}

impl OfferGrouping {
    #[must_use]
    pub fn new(offer_index: usize, event: EventContext, triples: &[OddsTriple]) -> Self {
        Self {
            offer_index,
            event,
            groups: partition(triples),
            triple_count: triples.len(),
        }
    }

    /// True when positional market inference is trustworthy for this offer.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.triple_count == EXPECTED_TRIPLES
    }

    #[must_use]
    pub fn group(&self, kind: MarketKind) -> &MarketGroup {
        match kind {
            MarketKind::Totals => &self.groups[0],
            MarketKind::Spreads => &self.groups[1],
            MarketKind::MoneyLine => &self.groups[2],
        }
    }
}

/// Render a present JSON value as field text.
///
/// Strings come through verbatim, numbers and booleans in their JSON form.
/// `null` counts as absent.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Falsy values: `null`, `false`, zero, and empty strings, arrays and objects.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
