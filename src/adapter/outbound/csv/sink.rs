//! CSV file sink with whole-file replacement.
//!
//! Each batch is written to a hidden sibling file and renamed over the
//! target, so a reader opening the target sees a complete batch. The
//! sibling is removed on every failure path.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::writer::write_row;
use crate::domain::record::HEADER;
use crate::domain::OutputRecord;
use crate::error::Result;
use crate::port::RecordSink;

const SEPARATOR: char = ',';

/// Publishes records as `header + rows` to a single CSV file.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output.csv".to_owned());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

/// Removes the staging file unless the batch was committed.
struct Staged {
    path: PathBuf,
    committed: bool,
}

impl Drop for Staged {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

impl RecordSink for CsvFileSink {
    fn replace(&mut self, records: &[OutputRecord]) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut staged = Staged {
            path: self.staging_path(),
            committed: false,
        };

        {
            let mut out = BufWriter::new(File::create(&staged.path)?);
            write_row(&mut out, HEADER, SEPARATOR)?;
            for record in records {
                write_row(&mut out, record.to_fields(), SEPARATOR)?;
            }
            out.flush()?;
            out.get_ref().sync_all()?;
        }

        fs::rename(&staged.path, &self.path)?;
        staged.committed = true;

        debug!(path = %self.path.display(), rows = records.len(), "Replaced CSV output");
        Ok(self.path.clone())
    }
}
