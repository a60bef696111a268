//! Delimited-file sink adapter.

mod sink;
mod writer;

pub use sink::CsvFileSink;
pub use writer::write_row;
