//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the fetch-and-flatten cycle.

pub mod build;
pub mod cycle;
pub mod extract;

pub use build::RecordBuilder;
pub use cycle::{CycleOutcome, CyclePhase, PollCycle, PollMode};
pub use extract::{extract, Extraction};
