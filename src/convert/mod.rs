//! Record loop module
//!
//! Drives a newline-delimited JSON stream through inference and rendering,
//! producing a single multi-row INSERT statement.
//!
//! # Output shape
//!
//! ```text
//! CREATE TABLE IF NOT EXISTS t (a INTEGER, b VARCHAR);   -- only with `create`
//! INSERT INTO t (a, b) VALUES
//! (1, 'x'),
//! (2, 'y')
//! ;
//! ```

mod driver;

pub use driver::{convert, ConvertStats, Converter};
