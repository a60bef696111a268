//! Scripted [`FeedSource`] for cycle tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::port::FeedSource;

/// A feed that answers each `fetch()` with the next scripted result.
///
/// Once the script runs out every fetch fails, like an unreachable upstream.
pub struct ScriptedFeed {
    script: Mutex<VecDeque<Result<Value>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Append successful payloads to the script.
    pub fn with_payloads(self, payloads: Vec<Value>) -> Self {
        self.push(payloads.into_iter().map(Ok))
    }

    /// Append `n` failed fetches to the script.
    pub fn with_failures(self, n: usize) -> Self {
        self.push((0..n).map(|_| Err(failure())))
    }

    /// Shared counter of `fetch()` calls.
    pub fn fetch_count(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }

    fn push(self, items: impl Iterator<Item = Result<Value>>) -> Self {
        self.script.lock().extend(items);
        self
    }
}

impl Default for ScriptedFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// An undecodable body, the failure a test can build without a network.
fn failure() -> Error {
    match serde_json::from_str::<Value>("<html>503</html>") {
        Err(err) => Error::Json(err),
        Ok(_) => Error::MalformedPayload {
            reason: "scripted failure".into(),
        },
    }
}

#[async_trait]
impl FeedSource for ScriptedFeed {
    async fn fetch(&self) -> Result<Value> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        next.unwrap_or_else(|| Err(failure()))
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
