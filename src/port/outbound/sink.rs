//! Sink port for publishing flattened records.

use std::path::PathBuf;

use crate::domain::OutputRecord;
use crate::error::Result;

/// Destination for each cycle's records.
///
/// `replace` publishes a whole batch, discarding whatever the previous cycle
/// wrote. Readers must observe either the old batch or the new one, never a
/// mix. On error the previous batch stays in place.
pub trait RecordSink: Send {
    /// Publish `records` and return where they were written.
    fn replace(&mut self, records: &[OutputRecord]) -> Result<PathBuf>;
}
