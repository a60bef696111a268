//! Oddsline - flattens a nested sportsbook feed into a CSV record stream.
//!
//! Each cycle fetches the DraftKings event-group payload, walks its offer
//! list with a fault-tolerant path accessor, splits every offer's outcomes
//! into totals, spreads and money-line groups by position, and rewrites one
//! CSV file with a row per (event, market, selection).
//!
//! # Modules
//!
//! - [`domain`] - Path lookup, odds types and the output row
//! - [`application`] - Extraction, record building and the poll cycle
//! - [`port`] - Feed and sink traits
//! - [`adapter`] - DraftKings HTTP client, CSV sink and the CLI
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsline::application::{extract, RecordBuilder};
//! use serde_json::json;
//!
//! let payload = json!({ "eventGroup": { "offerCategories": [] } });
//! assert!(extract(&payload).is_err());
//!
//! let builder = RecordBuilder::new("draftkings", "basketball");
//! assert!(builder.build(None, &[]).is_empty());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
