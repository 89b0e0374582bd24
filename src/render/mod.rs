//! SQL rendering module
//!
//! Turns a type mapping and decoded records into SQL text fragments.
//! CREATE TABLE columns, INSERT header columns and every value tuple are
//! emitted in the same sorted field order so they line up column-for-column.

mod statements;
mod values;

pub use statements::{render_create_table, render_insert_header, render_value_tuple};
pub use values::{escape_single_quotes, render_fallback, render_value};

#[cfg(test)]
mod tests;
