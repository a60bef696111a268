//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`feed`] - [`FeedSource`](crate::port::FeedSource) double with a
//!   scripted queue of payloads and failures.
//! - [`sink`] - In-memory [`RecordSink`](crate::port::RecordSink).
//! - [`payload`] - Canonical event-group payloads.

pub mod feed;
pub mod payload;
pub mod sink;
