//! Bridging between [`Value`] and the generic `serde_json::Value`.
//!
//! The inbound direction prefers the most specific numeric tag serde_json can
//! report (`i64`, then `u64`, then `f64`) and fails on numbers it cannot
//! represent at all. The outbound direction is total.
use serde_json::Value as JsonValue;

use crate::error::ConversionError;
use crate::value::{Number, Value};

impl TryFrom<JsonValue> for Value {
    type Error = ConversionError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Ok(match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match number_from_json(&n) {
                Some(n) => Value::Number(n),
                None => return Err(ConversionError::UnsupportedValue(JsonValue::Number(n))),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Ok((k, Value::try_from(v)?)))
                    .collect::<Result<_, ConversionError>>()?,
            ),
        })
    }
}

fn number_from_json(n: &serde_json::Number) -> Option<Number> {
    if let Some(i) = n.as_i64() {
        Some(Number::Int(i))
    } else if let Some(u) = n.as_u64() {
        Some(Number::UInt(u))
    } else {
        n.as_f64().filter(|f| f.is_finite()).map(Number::Double)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Object(map) => {
                JsonValue::Object(map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        JsonValue::from(value.clone())
    }
}

// Non-finite floats have no JSON number form and map to null.
fn number_to_json(n: Number) -> JsonValue {
    match n {
        Number::Int(i) | Number::Int64(i) => JsonValue::from(i),
        Number::UInt(u) | Number::UInt64(u) => JsonValue::from(u),
        Number::Float(f) => float_to_json(f64::from(f)),
        Number::Double(f) => float_to_json(f),
    }
}

fn float_to_json(f: f64) -> JsonValue {
    serde_json::Number::from_f64(f)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}
