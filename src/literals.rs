//! Literal construction.
//!
//! Signed integers become `Int`, unsigned integers `UInt`, `f32` becomes
//! `Float` and `f64` becomes `Double`. `None` and `()` become `Null`.
use crate::value::{Map, Number, Value};

macro_rules! from_integer {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self { Number::$variant(n as $wide) }
            }
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self { Value::Number(Number::from(n)) }
            }
        )*
    };
}

from_integer!(Int as i64: i8, i16, i32, i64, isize);
from_integer!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f32> for Number {
    fn from(n: f32) -> Self { Number::Float(n) }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self { Number::Double(n) }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self { Value::Number(Number::Float(n)) }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { Value::Number(Number::Double(n)) }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self { Value::Number(n) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::String(s.to_owned()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::String(s) }
}

impl From<()> for Value {
    fn from(_: ()) -> Self { Value::Null }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self { Value::Object(map) }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

/// Builds an object; a later duplicate key overwrites the earlier one.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
