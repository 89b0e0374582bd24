//! json2sql CLI
//!
//! Reads newline-delimited JSON and prints SQL INSERT statements

use clap::Parser;
use json2sql::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // SQL goes to stdout, so logs go to stderr
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
