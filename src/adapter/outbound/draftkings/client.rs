//! DraftKings REST client.
//!
//! One GET per cycle against the event-group endpoint. The body is returned
//! as an untyped JSON tree; shape checks belong to extraction.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::settings::DraftKingsConfig;
use crate::error::Result;
use crate::port::FeedSource;

/// HTTP client for the DraftKings event-group API.
pub struct DraftKingsClient {
    http: HttpClient,
    url: String,
    query: BTreeMap<String, String>,
    accept: String,
    accept_language: String,
    user_agent: String,
}

impl DraftKingsClient {
    #[must_use]
    pub fn from_config(config: &DraftKingsConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.url.clone(),
            query: config.query.clone(),
            accept: config.accept.clone(),
            accept_language: config.accept_language.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for DraftKingsClient {
    async fn fetch(&self) -> Result<Value> {
        info!(url = %self.url, "Fetching event group");

        let response = self
            .http
            .get(&self.url)
            .query(&self.query)
            .header(ACCEPT, &self.accept)
            .header(ACCEPT_LANGUAGE, &self.accept_language)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Received event group");

        Ok(serde_json::from_slice(&body)?)
    }

    fn source_name(&self) -> &'static str {
        "draftkings"
    }
}
