//! Structured encode/decode of [`Value`] through serde.
//!
//! Encoding writes the bare payload of each variant; the numeric tag does not
//! survive the wire. Decoding tries the single-value shapes in a fixed order
//! (null, bool, string, signed, unsigned, double), then sequences, then maps.
//! Decode failures carry the path at which they happened.
use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

use crate::error::DecodeError;
use crate::value::{Map, Number, Value};

// ------------------------------- Encoding --------------------------------- //

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Int(n) | Number::Int64(n) => serializer.serialize_i64(n),
            Number::UInt(n) | Number::UInt64(n) => serializer.serialize_u64(n),
            Number::Float(f) => serializer.serialize_f32(f),
            Number::Double(f) => serializer.serialize_f64(f),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}

// ------------------------------- Decoding --------------------------------- //

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_owned()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(Number::Int(n)))
    }

    // Signed wins whenever the value fits.
    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(match i64::try_from(n) {
            Ok(i) => Number::Int(i),
            Err(_) => Number::UInt(n),
        }))
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Number(Number::Double(f)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        let Some(first) = access.next_key::<String>()? else {
            return Ok(Value::Object(map));
        };
        #[cfg(feature = "arbitrary_precision")]
        if first == NUMBER_TOKEN {
            let digits: String = access.next_value()?;
            return number_from_digits(&digits).map(Value::Number);
        }
        map.insert(first, access.next_value()?);
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

// serde_json hands numbers over as a one-entry map under this key when
// `arbitrary_precision` is on.
#[cfg(feature = "arbitrary_precision")]
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

#[cfg(feature = "arbitrary_precision")]
fn number_from_digits<E: de::Error>(digits: &str) -> Result<Number, E> {
    if let Ok(n) = digits.parse::<i64>() {
        return Ok(Number::Int(n));
    }
    if let Ok(n) = digits.parse::<u64>() {
        return Ok(Number::UInt(n));
    }
    match digits.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Number::Double(f)),
        _ => Err(E::custom(format_args!("number out of range: {digits}"))),
    }
}

// -------------------------------- Helpers --------------------------------- //

/// Decode a [`Value`] from JSON text.
pub fn from_str(src: &str) -> Result<Value, DecodeError> {
    from_str_with_path(src)
}

pub fn from_slice(bytes: &[u8]) -> Result<Value, DecodeError> {
    from_slice_with_path(bytes)
}

/// Deserialize any type from JSON text, with the JSON path of the failure in
/// the error.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize(&mut de).map_err(classify)?;
    de.end().map_err(|err| classify_json(err, String::from(".")))?;
    Ok(value)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(classify)?;
    de.end().map_err(|err| classify_json(err, String::from(".")))?;
    Ok(value)
}

/// Decode a [`Value`] from an arbitrary serde deserializer.
pub fn decode<'de, D>(deserializer: D) -> Result<Value, DecodeError>
where
    D: Deserializer<'de>,
{
    serde_path_to_error::deserialize(deserializer).map_err(|err| DecodeError::DataCorrupted {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

pub fn to_string(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

pub fn to_string_pretty(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

fn classify(err: serde_path_to_error::Error<serde_json::Error>) -> DecodeError {
    let path = err.path().to_string();
    classify_json(err.into_inner(), path)
}

fn classify_json(err: serde_json::Error, path: String) -> DecodeError {
    use serde_json::error::Category;
    match err.classify() {
        Category::Data => DecodeError::DataCorrupted { path, message: err.to_string() },
        Category::Syntax | Category::Eof | Category::Io => DecodeError::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        },
    }
}
