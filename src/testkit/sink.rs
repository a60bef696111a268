//! In-memory [`RecordSink`].

use std::io;
use std::path::PathBuf;

use crate::domain::OutputRecord;
use crate::error::{Error, Result};
use crate::port::RecordSink;

/// Keeps every published batch; the last one is the "current contents".
#[derive(Debug, Default)]
pub struct MemorySink {
    batches: Vec<Vec<OutputRecord>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every `replace` fails with an IO error.
    pub fn failing() -> Self {
        Self {
            batches: Vec::new(),
            fail: true,
        }
    }

    pub fn batches(&self) -> &[Vec<OutputRecord>] {
        &self.batches
    }

    pub fn current(&self) -> Option<&[OutputRecord]> {
        self.batches.last().map(Vec::as_slice)
    }
}

impl RecordSink for MemorySink {
    fn replace(&mut self, records: &[OutputRecord]) -> Result<PathBuf> {
        if self.fail {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory sink is read-only",
            )));
        }
        self.batches.push(records.to_vec());
        Ok(PathBuf::from("memory"))
    }
}
