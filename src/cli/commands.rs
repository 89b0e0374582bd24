//! CLI arguments

use clap::Parser;
use std::path::PathBuf;

/// Convert newline-delimited JSON to SQL INSERT statements
#[derive(Parser, Debug)]
#[command(name = "json2sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Table name to use
    #[arg(short, long)]
    pub table: Option<String>,

    /// Include CREATE TABLE statement
    #[arg(short, long)]
    pub create: bool,

    /// Fail when a record's fields differ from the first record's
    #[arg(long)]
    pub strict: bool,

    /// Read records from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
