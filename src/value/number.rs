use std::fmt;
use std::hash::{Hash, Hasher};
use ordered_float::OrderedFloat;

/// A JSON number, tagged with the representation it was produced from.
///
/// Equality and hashing treat `(tag, payload)` as the identity: `Int(10)`,
/// `UInt(10)` and `Double(10.0)` are three distinct values. Floating point
/// payloads compare through [`OrderedFloat`], so `NaN == NaN` and the
/// `Eq`/`Hash` contract holds.
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Int64(i64),
    UInt(u64),
    UInt64(u64),
    Float(f32),
    Double(f64),
}

impl Number {
    /// Narrowing/widening view as `i64` (`as` semantics, floats saturate).
    pub fn to_i64(self) -> i64 {
        match self {
            Number::Int(n) | Number::Int64(n) => n,
            Number::UInt(n) | Number::UInt64(n) => n as i64,
            Number::Float(f) => f as i64,
            Number::Double(f) => f as i64,
        }
    }

    pub fn to_u64(self) -> u64 {
        match self {
            Number::Int(n) | Number::Int64(n) => n as u64,
            Number::UInt(n) | Number::UInt64(n) => n,
            Number::Float(f) => f as u64,
            Number::Double(f) => f as u64,
        }
    }

    pub fn to_f32(self) -> f32 {
        match self {
            Number::Int(n) | Number::Int64(n) => n as f32,
            Number::UInt(n) | Number::UInt64(n) => n as f32,
            Number::Float(f) => f,
            Number::Double(f) => f as f32,
        }
    }

    pub fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) | Number::Int64(n) => n as f64,
            Number::UInt(n) | Number::UInt64(n) => n as f64,
            Number::Float(f) => f64::from(f),
            Number::Double(f) => f,
        }
    }

    /// Tag name, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Int64(_) => "int64",
            Number::UInt(_) => "uint",
            Number::UInt64(_) => "uint64",
            Number::Float(_) => "float",
            Number::Double(_) => "double",
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Int64(a), Number::Int64(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::UInt64(a), Number::UInt64(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Number::Double(a), Number::Double(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Number::Int(n) | Number::Int64(n) => n.hash(state),
            Number::UInt(n) | Number::UInt64(n) => n.hash(state),
            Number::Float(f) => OrderedFloat(*f).hash(state),
            Number::Double(f) => OrderedFloat(*f).hash(state),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) | Number::Int64(n) => write!(f, "{n}"),
            Number::UInt(n) | Number::UInt64(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x}"),
            Number::Double(x) => write!(f, "{x}"),
        }
    }
}
