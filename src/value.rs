//! The JSON tree.
//!
//! A [`Value`] owns all of its descendants: there is no sharing between
//! subtrees, so "mutation" is always replacement of a slot by its single
//! owner. Objects are backed by an [`IndexMap`]; insertion order is kept for
//! output stability but carries no meaning for equality or hashing.
pub mod number;

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use indexmap::IndexMap;

pub use number::Number;

/// Object payload.
pub type Map = IndexMap<String, Value>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Empty object, the usual starting point for scaffolded writes.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Variant name, used in diagnostics and log records.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

// ------------------------------- Hashing ---------------------------------- //

// Arrays fold positionally; objects sum per-entry hashes so that key order
// cannot change the result.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Array(items) => items.hash(state),
            Value::Object(map) => {
                let mut sum = 0u64;
                for (key, value) in map {
                    let mut entry = DefaultHasher::new();
                    key.hash(&mut entry);
                    value.hash(&mut entry);
                    sum = sum.wrapping_add(entry.finish());
                }
                map.len().hash(state);
                sum.hash(state);
            }
        }
    }
}

// ------------------------------- Display ---------------------------------- //

/// Compact JSON text. Non-finite floats print as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::codec::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
