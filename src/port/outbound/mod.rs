//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two I/O shells around the odds core: the
//! feed transport and the tabular sink.

pub mod feed;
pub mod sink;
