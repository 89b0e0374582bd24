//! Tests for SQL rendering

use super::*;
use crate::error::Error;
use crate::schema::{build_type_mapping, SqlType, TypeMapping};
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn object(value: serde_json::Value) -> JsonObject {
    value.as_object().cloned().unwrap()
}

/// Column names between the first pair of parentheses
fn column_names(sql: &str) -> Vec<String> {
    let start = sql.find('(').unwrap() + 1;
    let end = sql.find(')').unwrap();
    sql[start..end]
        .split(", ")
        .map(|part| part.split(' ').next().unwrap().to_string())
        .collect()
}

// ============================================================================
// escape_single_quotes
// ============================================================================

#[test_case("hello world", "hello world" ; "no quotes")]
#[test_case("it's raining", "it''s raining" ; "single quote")]
#[test_case("I said 'hello'", "I said ''hello''" ; "multiple quotes")]
#[test_case("", "" ; "empty")]
#[test_case("'", "''" ; "only a quote")]
fn test_escape_single_quotes(input: &str, expected: &str) {
    assert_eq!(escape_single_quotes(input), expected);
}

#[test]
fn test_escape_single_quotes_collapse_recovers_original() {
    for input in ["it's", "'quoted'", "no quotes", "a'b'c'"] {
        let escaped = escape_single_quotes(input);
        assert_eq!(escaped.replace("''", "'"), input);
    }
}

// ============================================================================
// render_value
// ============================================================================

#[test_case(json!("hello"), SqlType::Varchar, "'hello'" ; "varchar")]
#[test_case(json!("O'Brien"), SqlType::Varchar, "'O''Brien'" ; "varchar with quote")]
#[test_case(json!(3.14), SqlType::Double, "3.140000" ; "double fixed six decimals")]
#[test_case(json!(2), SqlType::Double, "2.000000" ; "integer value in double column")]
#[test_case(json!(42.0), SqlType::Integer, "42" ; "integer from float")]
#[test_case(json!(42), SqlType::Integer, "42" ; "integer")]
#[test_case(json!(2.9), SqlType::Integer, "2" ; "integer truncates")]
#[test_case(json!(-2.9), SqlType::Integer, "-2" ; "integer truncates toward zero")]
#[test_case(json!(u64::MAX), SqlType::Integer, "18446744073709551615" ; "integer large unsigned")]
#[test_case(json!(-0.5), SqlType::Integer, "0" ; "integer truncates to zero without sign")]
#[test_case(json!(1e19), SqlType::Integer, "10000000000000000000" ; "integer float above i64 range")]
#[test_case(json!(-1e19), SqlType::Integer, "-10000000000000000000" ; "integer float below i64 range")]
#[test_case(json!(true), SqlType::Boolean, "true" ; "boolean true")]
#[test_case(json!(false), SqlType::Boolean, "false" ; "boolean false")]
#[test_case(json!("unknown"), SqlType::Fallback, "'unknown'" ; "fallback string")]
#[test_case(json!(null), SqlType::Fallback, "'null'" ; "fallback null")]
#[test_case(json!([1, "a"]), SqlType::Fallback, "'[1,\"a\"]'" ; "fallback array")]
#[test_case(json!({"k": "it's"}), SqlType::Row, "'{\"k\":\"it''s\"}'" ; "row escapes quotes")]
fn test_render_value(value: serde_json::Value, sql_type: SqlType, expected: &str) {
    assert_eq!(render_value("field", &value, sql_type).unwrap(), expected);
}

#[test_case(json!(1), SqlType::Varchar, "number" ; "number in varchar")]
#[test_case(json!(null), SqlType::Varchar, "null" ; "null in varchar")]
#[test_case(json!("42"), SqlType::Integer, "string" ; "string in integer")]
#[test_case(json!(true), SqlType::Double, "boolean" ; "boolean in double")]
#[test_case(json!(1), SqlType::Boolean, "number" ; "number in boolean")]
fn test_render_value_type_mismatch(value: serde_json::Value, sql_type: SqlType, kind: &str) {
    let err = render_value("field", &value, sql_type).unwrap_err();
    match err {
        Error::TypeMismatch {
            field,
            expected,
            found,
        } => {
            assert_eq!(field, "field");
            assert_eq!(expected, sql_type);
            assert_eq!(found, kind);
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
}

// ============================================================================
// render_create_table
// ============================================================================

#[test]
fn test_render_create_table() {
    let mapping: TypeMapping = [
        ("field2", SqlType::Double),
        ("field1", SqlType::Varchar),
        ("field3", SqlType::Integer),
        ("field4", SqlType::Boolean),
        ("field5", SqlType::Fallback),
        ("field6", SqlType::Row),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        render_create_table("mytable", &mapping),
        "CREATE TABLE IF NOT EXISTS mytable (field1 VARCHAR, field2 DOUBLE, field3 INTEGER, \
         field4 BOOLEAN, field5 VARCHAR, field6 ROW);"
    );
}

#[test]
fn test_render_create_table_empty_name() {
    let mapping = build_type_mapping(&object(json!({"a": 1})));
    assert_eq!(
        render_create_table("", &mapping),
        "CREATE TABLE IF NOT EXISTS  (a INTEGER);"
    );
}

// ============================================================================
// render_insert_header / render_value_tuple
// ============================================================================

#[test]
fn test_render_insert_header() {
    let record = object(json!({"foo": 1, "baz": "qux"}));
    assert_eq!(
        render_insert_header("mytable", &record),
        "INSERT INTO mytable (baz, foo) VALUES"
    );
}

#[test]
fn test_render_value_tuple() {
    let record = object(json!({"foo": 1, "baz": "qux", "ok": false, "ratio": 0.5}));
    let mapping = build_type_mapping(&record);

    assert_eq!(
        render_value_tuple(&record, &mapping).unwrap(),
        "('qux', 1, false, 0.500000)"
    );
}

#[test]
fn test_render_value_tuple_uses_given_mapping() {
    let first = object(json!({"score": 1.5}));
    let mapping = build_type_mapping(&first);

    let later = object(json!({"score": 7}));
    assert_eq!(render_value_tuple(&later, &mapping).unwrap(), "(7.000000)");
}

#[test]
fn test_render_value_tuple_unknown_field_falls_back() {
    let mapping = build_type_mapping(&object(json!({"a": 1})));
    let record = object(json!({"a": 2, "b": 3}));

    assert_eq!(render_value_tuple(&record, &mapping).unwrap(), "(2, '3')");
}

#[test]
fn test_render_integer_huge_float_is_not_saturated() {
    let rendered = render_value("big", &json!(1e300), SqlType::Integer).unwrap();

    assert_eq!(rendered.len(), 301);
    assert!(rendered.starts_with("1000000000000000052504760255"));
    assert!(!rendered.contains('.'));
    assert_ne!(rendered, i64::MAX.to_string());
}

#[test]
fn test_render_value_tuple_skips_missing_fields() {
    let mapping = build_type_mapping(&object(json!({"a": 1, "b": "x"})));
    let record = object(json!({"b": "y"}));

    assert_eq!(mapping.missing_fields(&record), vec!["a"]);
    assert_eq!(render_value_tuple(&record, &mapping).unwrap(), "('y')");
}

#[test]
fn test_render_value_tuple_propagates_mismatch() {
    let mapping = build_type_mapping(&object(json!({"name": "x"})));
    let record = object(json!({"name": 5}));

    assert!(matches!(
        render_value_tuple(&record, &mapping),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_column_order_matches_across_outputs() {
    let record = object(json!({"zeta": 1, "alpha": "a", "mid": true, "Beta": 2.5}));
    let mapping = build_type_mapping(&record);

    let create = render_create_table("t", &mapping);
    let header = render_insert_header("t", &record);
    let tuple = render_value_tuple(&record, &mapping).unwrap();

    let expected = vec!["Beta", "alpha", "mid", "zeta"];
    assert_eq!(column_names(&create), expected);
    assert_eq!(column_names(&header), expected);
    assert_eq!(tuple, "(2.500000, 'a', true, 1)");
}
