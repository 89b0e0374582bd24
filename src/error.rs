//! Error types for json2sql
//!
//! Every failure is fatal: the converter stops at the first error and the
//! binary exits non-zero. All public APIs return `Result<T, Error>`.

use crate::schema::SqlType;
use thiserror::Error;

/// The main error type for json2sql
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to decode JSON at line {line}: {message}")]
    Decode { line: usize, message: String },

    #[error("Type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: SqlType,
        found: String,
    },

    #[error("Schema mismatch at line {line}: {message}")]
    SchemaMismatch { line: usize, message: String },

    #[error("Line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a decode error
    pub fn decode(line: usize, message: impl Into<String>) -> Self {
        Self::Decode {
            line,
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: SqlType,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    /// Create a schema mismatch error
    pub fn schema_mismatch(line: usize, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            line,
            message: message.into(),
        }
    }

    /// Attach the input line a record-level error came from
    pub fn at_line(line: usize, source: Error) -> Self {
        Self::Record {
            line,
            source: Box::new(source),
        }
    }

    /// Input line this error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Decode { line, .. }
            | Error::SchemaMismatch { line, .. }
            | Error::Record { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Innermost error, unwrapping any line context
    pub fn root(&self) -> &Error {
        match self {
            Error::Record { source, .. } => source.root(),
            other => other,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Result type alias for json2sql
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
