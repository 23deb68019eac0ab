//! Typed views over a [`Value`].
//!
//! Getters are partial projections: they return the payload when the variant
//! matches and `None` otherwise. Numeric getters accept every numeric variant
//! and convert with `as` semantics. Setters replace the whole node, with
//! `None` meaning `Null`, whatever the node held before.
use crate::value::{Map, Number, Value};

// ------------------------------ Predicates -------------------------------- //

impl Value {
    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }
    pub fn is_bool(&self) -> bool { matches!(self, Value::Bool(_)) }
    pub fn is_number(&self) -> bool { matches!(self, Value::Number(_)) }
    pub fn is_int(&self) -> bool { matches!(self, Value::Number(Number::Int(_))) }
    pub fn is_int64(&self) -> bool { matches!(self, Value::Number(Number::Int64(_))) }
    pub fn is_uint(&self) -> bool { matches!(self, Value::Number(Number::UInt(_))) }
    pub fn is_uint64(&self) -> bool { matches!(self, Value::Number(Number::UInt64(_))) }
    pub fn is_float(&self) -> bool { matches!(self, Value::Number(Number::Float(_))) }
    pub fn is_double(&self) -> bool { matches!(self, Value::Number(Number::Double(_))) }
    pub fn is_string(&self) -> bool { matches!(self, Value::String(_)) }
    pub fn is_array(&self) -> bool { matches!(self, Value::Array(_)) }
    pub fn is_object(&self) -> bool { matches!(self, Value::Object(_)) }
}

// -------------------------------- Getters --------------------------------- //

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric variant, narrowed to `i64`. `Double(3.9)` reads as `3`.
    pub fn as_int(&self) -> Option<i64> {
        self.as_number().map(Number::to_i64)
    }

    pub fn as_uint(&self) -> Option<u64> {
        self.as_number().map(Number::to_u64)
    }

    pub fn as_float(&self) -> Option<f32> {
        self.as_number().map(Number::to_f32)
    }

    pub fn as_double(&self) -> Option<f64> {
        self.as_number().map(Number::to_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

// -------------------------------- Setters --------------------------------- //

impl Value {
    fn replace_with<T>(&mut self, value: Option<T>, wrap: impl FnOnce(T) -> Value) {
        *self = value.map_or(Value::Null, wrap);
    }

    pub fn set_bool(&mut self, value: Option<bool>) {
        self.replace_with(value, Value::Bool);
    }

    pub fn set_int(&mut self, value: Option<i64>) {
        self.replace_with(value, |n| Value::Number(Number::Int(n)));
    }

    pub fn set_uint(&mut self, value: Option<u64>) {
        self.replace_with(value, |n| Value::Number(Number::UInt(n)));
    }

    pub fn set_float(&mut self, value: Option<f32>) {
        self.replace_with(value, |n| Value::Number(Number::Float(n)));
    }

    pub fn set_double(&mut self, value: Option<f64>) {
        self.replace_with(value, |n| Value::Number(Number::Double(n)));
    }

    pub fn set_string(&mut self, value: Option<String>) {
        self.replace_with(value, Value::String);
    }

    pub fn set_array(&mut self, value: Option<Vec<Value>>) {
        self.replace_with(value, Value::Array);
    }

    pub fn set_object(&mut self, value: Option<Map>) {
        self.replace_with(value, Value::Object);
    }
}
