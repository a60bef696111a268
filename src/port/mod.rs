//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`FeedSource`] - Retrieves one raw sportsbook payload per call
//! - [`RecordSink`] - Replaces the published record batch

pub mod outbound;

pub use outbound::feed::FeedSource;
pub use outbound::sink::RecordSink;
