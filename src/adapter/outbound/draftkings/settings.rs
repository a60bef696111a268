//! DraftKings feed configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Endpoint, request headers and timeout for the event-group feed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DraftKingsConfig {
    /// Event-group endpoint.
    #[serde(default = "default_url")]
    pub url: String,
    /// Whole-request timeout in seconds. There is no retry.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_accept")]
    pub accept: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Query parameters appended to every request.
    #[serde(default = "default_query")]
    pub query: BTreeMap<String, String>,
}

fn default_url() -> String {
    "https://sportsbook-nash-usny.draftkings.com/sites/US-NY-SB/api/v5/eventgroups/42648".into()
}

fn default_query() -> BTreeMap<String, String> {
    BTreeMap::from([("format".to_owned(), "json".to_owned())])
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_accept() -> String {
    "*/*".into()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
        .into()
}

impl Default for DraftKingsConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            accept: default_accept(),
            accept_language: default_accept_language(),
            user_agent: default_user_agent(),
            query: default_query(),
        }
    }
}
