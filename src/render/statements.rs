//! Statement-level rendering: DDL, INSERT header and value tuples

use super::values::{render_fallback, render_value};
use crate::error::Result;
use crate::schema::{sorted_keys, TypeMapping};
use crate::types::JsonObject;
use tracing::warn;

/// Render `CREATE TABLE IF NOT EXISTS <table> (<col> <TYPE>, ...);`
pub fn render_create_table(table: &str, mapping: &TypeMapping) -> String {
    let declarations: Vec<String> = mapping
        .iter()
        .map(|(column, sql_type)| format!("{column} {sql_type}"))
        .collect();

    format!(
        "CREATE TABLE IF NOT EXISTS {table} ({});",
        declarations.join(", ")
    )
}

/// Render `INSERT INTO <table> (<col>, ...) VALUES` from a record's field names.
///
/// The first record of a stream fixes the column order for the whole statement.
pub fn render_insert_header(table: &str, record: &JsonObject) -> String {
    format!(
        "INSERT INTO {table} ({}) VALUES",
        sorted_keys(record).join(", ")
    )
}

/// Render `(<v1>, <v2>, ...)` for one record.
///
/// Values are formatted according to the mapping's type for their field.
/// A field the mapping does not know about is rendered with the quoted
/// fallback, and mapped fields the record lacks are skipped. Both are
/// logged; callers that need to reject such records check beforehand.
pub fn render_value_tuple(record: &JsonObject, mapping: &TypeMapping) -> Result<String> {
    let mut values = Vec::with_capacity(record.len());

    for key in sorted_keys(record) {
        let value = &record[key];
        let rendered = match mapping.get(key) {
            Some(sql_type) => render_value(key, value, sql_type)?,
            None => {
                warn!(field = key, "Field not in type mapping, rendering as quoted text");
                render_fallback(value)
            }
        };
        values.push(rendered);
    }

    let missing = mapping.missing_fields(record);
    if !missing.is_empty() {
        warn!(
            fields = %missing.join(", "),
            "Record lacks mapped fields, tuple will be shorter than the column list"
        );
    }

    Ok(format!("({})", values.join(", ")))
}
