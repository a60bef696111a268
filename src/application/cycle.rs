//! Fetch, extract, build, emit.
//!
//! A [`PollCycle`] owns one feed and one sink and runs passes strictly one
//! after another. A failed pass is logged, reported and skipped; nothing is
//! retried within the pass and nothing escapes the polling loop.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::build::RecordBuilder;
use super::extract::extract;
use crate::error::Error;
use crate::port::{FeedSource, RecordSink};

/// Where a cycle is, or where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    Idle,
    Fetching,
    Extracting,
    Emitting,
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Emitting => "emitting",
        };
        f.write_str(name)
    }
}

/// What one pass produced.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The batch was published.
    Emitted {
        records: usize,
        /// Offers whose outcome count was not the expected six.
        flagged: usize,
        path: PathBuf,
    },
    /// The pass stopped at `phase`; the sink was not touched.
    Skipped { phase: CyclePhase, error: Error },
}

impl CycleOutcome {
    #[must_use]
    pub const fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted { .. })
    }
}

/// Single pass or repeat forever with a pause between passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    Once,
    Every(Duration),
}

pub struct PollCycle<F, S> {
    feed: F,
    sink: S,
    builder: RecordBuilder,
    phase: CyclePhase,
}

impl<F, S> PollCycle<F, S>
where
    F: FeedSource,
    S: RecordSink,
{
    pub fn new(feed: F, sink: S, builder: RecordBuilder) -> Self {
        Self {
            feed,
            sink,
            builder,
            phase: CyclePhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> CyclePhase {
        self.phase
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one fetch-extract-build-emit pass and return to idle.
    pub async fn run_once(&mut self) -> CycleOutcome {
        let outcome = self.pass().await;
        self.phase = CyclePhase::Idle;

        match &outcome {
            CycleOutcome::Emitted {
                records,
                flagged,
                path,
            } => info!(
                records,
                flagged,
                path = %path.display(),
                "Cycle complete"
            ),
            CycleOutcome::Skipped { phase, error } => warn!(
                source = self.feed.source_name(),
                phase = %phase,
                error = %error,
                "Cycle skipped"
            ),
        }
        outcome
    }

    /// Run passes according to `mode`, handing each outcome to `report`.
    ///
    /// `PollMode::Every` never returns; stop it by dropping the future.
    pub async fn run<R>(&mut self, mode: PollMode, mut report: R)
    where
        R: FnMut(&CycleOutcome),
    {
        match mode {
            PollMode::Once => {
                let outcome = self.run_once().await;
                report(&outcome);
            }
            PollMode::Every(interval) => loop {
                let outcome = self.run_once().await;
                report(&outcome);
                debug!(interval_ms = interval.as_millis() as u64, "Sleeping until next cycle");
                sleep(interval).await;
            },
        }
    }

    async fn pass(&mut self) -> CycleOutcome {
        self.phase = CyclePhase::Fetching;
        let payload = match self.feed.fetch().await {
            Ok(payload) => payload,
            Err(error) => return self.skip(error),
        };

        self.phase = CyclePhase::Extracting;
        let extraction = match extract(&payload) {
            Ok(extraction) => extraction,
            Err(error) => return self.skip(error),
        };
        let flagged = extraction.flagged().count();
        let records = self
            .builder
            .build(extraction.league.as_deref(), &extraction.offers);

        self.phase = CyclePhase::Emitting;
        match self.sink.replace(&records) {
            Ok(path) => CycleOutcome::Emitted {
                records: records.len(),
                flagged,
                path,
            },
            Err(error) => self.skip(error),
        }
    }

    fn skip(&self, error: Error) -> CycleOutcome {
        CycleOutcome::Skipped {
            phase: self.phase,
            error,
        }
    }
}
