//! Single value rendering

use crate::error::{Error, Result};
use crate::schema::SqlType;
use crate::types::{value_kind, JsonValue};
use serde_json::Number;

/// Double every single quote, the SQL-standard string literal escape
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render one value as a SQL literal for a column of the given type.
///
/// DOUBLE, INTEGER and BOOLEAN literals are emitted bare. A value whose JSON
/// kind does not match a VARCHAR, INTEGER, DOUBLE or BOOLEAN column is an
/// error. ROW and fallback columns accept anything and render it quoted.
pub fn render_value(field: &str, value: &JsonValue, sql_type: SqlType) -> Result<String> {
    let mismatch = || Error::type_mismatch(field, sql_type, value_kind(value));

    match sql_type {
        SqlType::Varchar => match value {
            JsonValue::String(s) => Ok(quote(s)),
            _ => Err(mismatch()),
        },
        SqlType::Double => match value {
            JsonValue::Number(n) => Ok(format!("{:.6}", n.as_f64().unwrap_or_default())),
            _ => Err(mismatch()),
        },
        SqlType::Integer => match value {
            JsonValue::Number(n) => Ok(render_integer(n)),
            _ => Err(mismatch()),
        },
        SqlType::Boolean => match value {
            JsonValue::Bool(b) => Ok(b.to_string()),
            _ => Err(mismatch()),
        },
        SqlType::Row | SqlType::Fallback => Ok(render_fallback(value)),
    }
}

/// Quoted rendering for values without a dedicated SQL literal.
///
/// Strings contribute their content; anything else its compact JSON text.
pub fn render_fallback(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => quote(s),
        other => quote(&other.to_string()),
    }
}

/// Truncate toward zero without a decimal point
fn render_integer(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    let truncated = n.as_f64().unwrap_or_default().trunc();
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        // also normalizes -0.0 to 0
        (truncated as i64).to_string()
    } else {
        format!("{truncated:.0}")
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", escape_single_quotes(s))
}
