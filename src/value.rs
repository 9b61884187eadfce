use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form metadata attached to a [`LogMessage`](crate::LogMessage).
///
/// A `BTreeMap` keeps the encoded form deterministic regardless of insertion
/// order.
pub type Properties = BTreeMap<String, Value>;

/// A single metadata value.
///
/// Values are self-describing and serialize in their natural JSON form
/// (untagged), so an encoded metadata bag reads like a plain JSON object.
/// `From` conversions cover the primitive Rust types:
///
/// ```rust
/// use routed_log::Value;
///
/// assert_eq!(Value::Integer(3), 3.into());
/// assert_eq!(Value::String("d2c9".to_string()), "d2c9".into());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A piece of text.
    String(String),
    /// A nested metadata map.
    Map(Properties),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Properties> for Value {
    fn from(value: Properties) -> Self {
        Value::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Value::Bool(true),                  "true"      ; "bool")]
    #[test_case(Value::Integer(42),                 "42"        ; "integer")]
    #[test_case(Value::Float(2.5),                  "2.5"       ; "float")]
    #[test_case(Value::String("hi".to_string()),    "\"hi\""    ; "string")]
    fn serializes_untagged(value: Value, expected: &'static str) {
        assert_eq!(expected, serde_json::to_string(&value).unwrap());
        let decoded: Value = serde_json::from_str(expected).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn nested_map_round_trips() {
        let mut inner = Properties::new();
        inner.insert("status".into(), 502.into());
        let mut outer = Properties::new();
        outer.insert("upstream".into(), inner.into());
        outer.insert("retryable".into(), true.into());

        let value = Value::Map(outer);
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(
            "{\"retryable\":true,\"upstream\":{\"status\":502}}",
            encoded
        );
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value, decoded);
    }

    #[test]
    fn integers_and_floats_stay_distinct() {
        let decoded: Value = serde_json::from_str("3").unwrap();
        assert_eq!(Value::Integer(3), decoded);
        let decoded: Value = serde_json::from_str("3.0").unwrap();
        assert_eq!(Value::Float(3.0), decoded);
    }
}
