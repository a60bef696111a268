//! DraftKings event-group feed adapter.

mod client;
mod settings;

pub use client::DraftKingsClient;
pub use settings::DraftKingsConfig;
