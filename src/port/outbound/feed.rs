//! Feed port for raw payload retrieval.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Source of raw sportsbook payloads.
///
/// One call is one request: implementations apply their own timeout and
/// must not retry. Any failure is reported as an error and ends the cycle.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the current payload as an untyped JSON tree.
    async fn fetch(&self) -> Result<Value>;

    /// Name of the upstream, for logs.
    fn source_name(&self) -> &'static str;
}
