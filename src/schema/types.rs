//! Schema types

use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// SQL column type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    /// Text column
    Varchar,
    /// Whole number column
    Integer,
    /// Floating point column
    Double,
    /// Boolean column
    Boolean,
    /// Nested object column
    Row,
    /// Arrays, nulls and anything else; declared as VARCHAR, rendered quoted
    Fallback,
}

impl SqlType {
    /// Column type name as it appears in DDL
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::Varchar | SqlType::Fallback => "VARCHAR",
            SqlType::Integer => "INTEGER",
            SqlType::Double => "DOUBLE",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Row => "ROW",
        }
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Field name → SQL type table, fixed once built.
///
/// Backed by a `BTreeMap`, so iteration is always in lexicographic key order
/// and lines up column-for-column with the rendered INSERT header and tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeMapping {
    columns: BTreeMap<String, SqlType>,
}

impl TypeMapping {
    /// Look up the type recorded for a field
    pub fn get(&self, field: &str) -> Option<SqlType> {
        self.columns.get(field).copied()
    }

    /// Check whether a field is part of the mapping
    pub fn contains(&self, field: &str) -> bool {
        self.columns.contains_key(field)
    }

    /// Field names in sorted order
    pub fn sorted_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// `(field, type)` pairs in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, SqlType)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Record fields the mapping has no column for, sorted
    pub fn unknown_fields<'r>(&self, record: &'r JsonObject) -> Vec<&'r str> {
        let mut fields: Vec<&str> = record
            .keys()
            .map(String::as_str)
            .filter(|key| !self.contains(key))
            .collect();
        fields.sort_unstable();
        fields
    }

    /// Mapping columns the record does not provide, sorted
    pub fn missing_fields(&self, record: &JsonObject) -> Vec<&str> {
        self.sorted_keys()
            .filter(|key| !record.contains_key(*key))
            .collect()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the mapping has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SqlType)> for TypeMapping {
    fn from_iter<I: IntoIterator<Item = (K, SqlType)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
