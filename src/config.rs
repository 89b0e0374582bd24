//! Conversion configuration
//!
//! The converter takes everything it needs from an explicit [`ConvertConfig`]
//! value. Settings can come from a JSON file and are then overridden by
//! command-line flags.
//!
//! # Example config file
//!
//! ```json
//! {
//!   "table": "events",
//!   "create": true,
//!   "strict": false
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Settings for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Table name used in CREATE TABLE and INSERT INTO
    pub table: String,

    /// Emit a CREATE TABLE statement before the INSERT
    pub create: bool,

    /// Reject records whose field set differs from the first record
    pub strict: bool,
}

impl ConvertConfig {
    /// Create a config for a table with default settings
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Enable or disable the CREATE TABLE statement
    #[must_use]
    pub fn with_create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Enable or disable strict field set checking
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(format!("Invalid config JSON: {e}")))
    }

    /// Log anything that will produce malformed SQL
    pub fn warn_if_suspicious(&self) {
        if self.table.trim().is_empty() {
            warn!("No table name given, generated SQL will not be valid");
        }
    }
}
