//! Lenient field decoding.
//!
//! Recorders are loose about scalar types: a checkbox value may arrive as
//! `true`, a key code as `"9"`, a viewport width as `1280.5`. These helpers
//! accept any JSON shape so one odd field never rejects a whole recording.
//! A value that cannot be read decodes as `None`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text form of any JSON value; `null` is absent.
///
/// Numbers print without a trailing `.0`; arrays and objects print as
/// compact JSON.
pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(text(&Value::deserialize(d)?))
}

/// A number given as a JSON number or a numeric string.
pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(as_number(&Value::deserialize(d)?))
}

/// A non-negative whole number given as a JSON number or a numeric string.
pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    let value = Value::deserialize(d)?;
    if let Some(n) = value.as_u64() {
        return Ok(Some(n));
    }
    Ok(as_number(&value)
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
        .map(|n| n as u64))
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
        other => Some(other.to_string()),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "number")]
        number: Option<f64>,
        #[serde(default, deserialize_with = "integer")]
        integer: Option<u64>,
    }

    fn decode(value: serde_json::Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_from_scalars() {
        assert_eq!(decode(json!({"text": "a"})).text.as_deref(), Some("a"));
        assert_eq!(decode(json!({"text": true})).text.as_deref(), Some("true"));
        assert_eq!(decode(json!({"text": 5})).text.as_deref(), Some("5"));
        assert_eq!(decode(json!({"text": 5.0})).text.as_deref(), Some("5"));
        assert_eq!(decode(json!({"text": 2.5})).text.as_deref(), Some("2.5"));
        assert_eq!(decode(json!({"text": [1, 2]})).text.as_deref(), Some("[1,2]"));
        assert_eq!(decode(json!({"text": null})).text, None);
        assert_eq!(decode(json!({})).text, None);
    }

    #[test]
    fn test_number_accepts_strings_and_floats() {
        assert_eq!(decode(json!({"number": 1280.5})).number, Some(1280.5));
        assert_eq!(decode(json!({"number": "720"})).number, Some(720.0));
        assert_eq!(decode(json!({"number": "wide"})).number, None);
        assert_eq!(decode(json!({"number": false})).number, None);
    }

    #[test]
    fn test_integer_accepts_whole_numbers_only() {
        assert_eq!(decode(json!({"integer": 9})).integer, Some(9));
        assert_eq!(decode(json!({"integer": "9"})).integer, Some(9));
        assert_eq!(decode(json!({"integer": 9.0})).integer, Some(9));
        assert_eq!(decode(json!({"integer": 9.5})).integer, None);
        assert_eq!(decode(json!({"integer": -1})).integer, None);
    }
}
