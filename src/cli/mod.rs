//! CLI module
//!
//! Command-line interface: reads NDJSON from stdin (or `--input`) and
//! writes SQL to stdout.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
