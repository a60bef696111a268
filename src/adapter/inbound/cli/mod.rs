//! CLI module graph.

pub mod command;
pub mod config;
pub mod draftkings;
pub mod output;
