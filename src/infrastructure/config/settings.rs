//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Every section has defaults matching the DraftKings NBA feed, so
//! running without a configuration file is the normal case.
//!
//! # Example
//!
//! ```no_run
//! use oddsline::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("oddsline.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::adapter::outbound::draftkings::DraftKingsConfig;
use crate::error::{ConfigError, Result};

/// Where and under which labels records are published.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// CSV file rewritten on every successful cycle.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Value of the `sportbookName` column.
    #[serde(default = "default_sportsbook")]
    pub sportsbook: String,
    /// Value of the `sportName` column.
    #[serde(default = "default_sport")]
    pub sport: String,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("draftkings.csv")
}

fn default_sportsbook() -> String {
    "draftkings".into()
}

fn default_sport() -> String {
    "basketball".into()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            sportsbook: default_sportsbook(),
            sport: default_sport(),
        }
    }
}

/// Polling cadence.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// Pause between the end of one cycle and the start of the next.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

const fn default_interval_secs() -> u64 {
    5
}

impl PollConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Feed endpoint and request settings.
    #[serde(default)]
    pub feed: DraftKingsConfig,

    /// Output file and static column values.
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub poll: PollConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Render the effective configuration as TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    fn validate(&self) -> Result<()> {
        if self.feed.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        match url::Url::parse(&self.feed.url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidValue {
                    field: "url",
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                }
                .into());
            }
            Err(err) => {
                return Err(ConfigError::InvalidValue {
                    field: "url",
                    reason: err.to_string(),
                }
                .into());
            }
        }
        if self.feed.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.poll.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "path" }.into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be 'pretty' or 'json'".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert!(config.feed.url.contains("draftkings.com"));
        assert_eq!(config.feed.timeout_secs, 10);
        assert_eq!(config.poll.interval(), Duration::from_secs(5));
        assert_eq!(config.output.path, PathBuf::from("draftkings.csv"));
        assert_eq!(config.output.sportsbook, "draftkings");
        assert_eq!(config.output.sport, "basketball");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse_toml(
            r#"
[output]
path = "out/nba.csv"

[feed.query]
format = "json"
lang = "en"
"#,
        )
        .unwrap();
        assert_eq!(config.output.path, PathBuf::from("out/nba.csv"));
        assert_eq!(config.output.sport, "basketball");
        assert_eq!(config.feed.query.len(), 2);
        assert_eq!(config.feed.accept, "*/*");
    }

    #[test]
    fn rejects_bad_url() {
        let result = Config::parse_toml("[feed]\nurl = \"not a url\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "url", .. }))
        ));

        let result = Config::parse_toml("[feed]\nurl = \"ftp://example.com/feed\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "url", .. }))
        ));

        let result = Config::parse_toml("[feed]\nurl = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "url" }))
        ));
    }

    #[test]
    fn rejects_zero_timeout_and_interval() {
        let result = Config::parse_toml("[feed]\ntimeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "timeout_secs",
                ..
            }))
        ));

        let result = Config::parse_toml("[poll]\ninterval_secs = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "interval_secs",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("[feed\nurl=");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn effective_config_round_trips_through_toml() {
        let rendered = Config::default().to_toml();
        let parsed = Config::parse_toml(&rendered).unwrap();
        assert_eq!(parsed.feed.url, Config::default().feed.url);
        assert_eq!(parsed.output.path, Config::default().output.path);
    }
}
