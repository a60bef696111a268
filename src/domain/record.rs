//! The flat output row.

use chrono::NaiveDateTime;
use serde::Serialize;

use serde_json::Value;

use super::odds::{scalar_text, MarketKind};

/// Column names, in output order.
pub const HEADER: [&str; 10] = [
    "sportbookName",
    "sportName",
    "league",
    "eventName",
    "gameTime",
    "marketName",
    "retrievedAt",
    "betSelection",
    "priceSelection",
    "isLocked",
];

/// Format of the `retrievedAt` column.
pub const RETRIEVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One row per (event, market, selection).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    #[serde(rename = "sportbookName")]
    pub sportsbook: String,
    #[serde(rename = "sportName")]
    pub sport: String,
    pub league: Option<String>,
    pub event_name: Option<String>,
    pub game_time: Option<String>,
    #[serde(rename = "marketName")]
    pub market: MarketKind,
    pub retrieved_at: NaiveDateTime,
    pub bet_selection: String,
    #[serde(rename = "priceSelection")]
    pub price: Option<String>,
    /// Carries the feed's `isOpen` flag unchanged: `true` means the offer is
    /// open, despite the column name.
    pub is_locked: Option<Value>,
}

impl OutputRecord {
    /// Render the row as text fields in [`HEADER`] order. Absent values are
    /// empty strings.
    #[must_use]
    pub fn to_fields(&self) -> [String; 10] {
        [
            self.sportsbook.clone(),
            self.sport.clone(),
            self.league.clone().unwrap_or_default(),
            self.event_name.clone().unwrap_or_default(),
            self.game_time.clone().unwrap_or_default(),
            self.market.as_str().to_owned(),
            self.retrieved_at.format(RETRIEVED_AT_FORMAT).to_string(),
            self.bet_selection.clone(),
            self.price.clone().unwrap_or_default(),
            self.is_locked
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_default(),
        ]
    }
}
