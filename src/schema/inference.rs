//! Type inference from JSON values

use super::types::{SqlType, TypeMapping};
use crate::types::{JsonObject, JsonValue};

/// Infer the SQL type of a single JSON value.
///
/// Numbers with a zero fractional part (`42`, `-7`, `42.0`, `1e3`) are
/// `INTEGER`; any other number is `DOUBLE`. Arrays and nulls fall back to
/// a quoted VARCHAR column.
pub fn infer_type(value: &JsonValue) -> SqlType {
    match value {
        JsonValue::String(_) => SqlType::Varchar,
        JsonValue::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return SqlType::Integer;
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 => SqlType::Integer,
                _ => SqlType::Double,
            }
        }
        JsonValue::Bool(_) => SqlType::Boolean,
        JsonValue::Object(_) => SqlType::Row,
        JsonValue::Array(_) | JsonValue::Null => SqlType::Fallback,
    }
}

/// Build the type mapping for a record, one column per field
pub fn build_type_mapping(record: &JsonObject) -> TypeMapping {
    sorted_keys(record)
        .into_iter()
        .map(|key| (key, infer_type(&record[key])))
        .collect()
}

/// Field names of a record in lexicographic order
pub fn sorted_keys(record: &JsonObject) -> Vec<&str> {
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
