//! Configuration loading, validation and logging setup.

mod logging;
mod settings;

pub use logging::LoggingConfig;
pub use settings::{Config, OutputConfig, PollConfig};
