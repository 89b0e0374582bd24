//! # json2sql
//!
//! Converts newline-delimited JSON objects into a single multi-row SQL
//! `INSERT` statement, optionally preceded by `CREATE TABLE`.
//!
//! Column types are inferred once, from the first record, and every later
//! record is rendered against that fixed mapping.
//!
//! ## Quick Start
//!
//! ```rust
//! use json2sql::{convert, ConvertConfig};
//!
//! let input = "{\"baz\":\"qux\",\"foo\":1}\n";
//! let config = ConvertConfig::new("mytable").with_create(true);
//!
//! let mut sql = Vec::new();
//! convert(&config, input.as_bytes(), &mut sql).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(sql).unwrap(),
//!     "CREATE TABLE IF NOT EXISTS mytable (baz VARCHAR, foo INTEGER);\n\
//!      INSERT INTO mytable (baz, foo) VALUES\n\
//!      ('qux', 1)\n\
//!      ;\n"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  stdin ──► convert (record loop) ──► stdout
//!               │           │
//!               ▼           ▼
//!            schema      render
//!        (type mapping) (CREATE / INSERT / tuples)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Conversion settings
pub mod config;

/// SQL type inference from JSON records
pub mod schema;

/// SQL statement rendering
pub mod render;

/// Line-by-line conversion driver
pub mod convert;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ConvertConfig;
pub use convert::{convert, ConvertStats, Converter};
pub use error::{Error, Result};
pub use schema::{SqlType, TypeMapping};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
