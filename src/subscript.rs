//! Single-level navigation by object key or array index.
//!
//! Writes promote a `Null` node to the container the subscript implies and
//! silently ignore nodes of any other kind.
use crate::value::{Map, Value};

impl Value {
    /// Child under `key`, if this is an object that has it.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Insert, overwrite (`Some`) or remove (`None`) `key`.
    ///
    /// `Null` becomes a one-entry object when a value is given; clearing a key
    /// on `Null` leaves it `Null`. Scalars and arrays are left untouched.
    pub fn set_key(&mut self, key: &str, value: Option<Value>) {
        match self {
            Value::Null => {
                if let Some(value) = value {
                    let mut map = Map::new();
                    map.insert(key.to_owned(), value);
                    *self = Value::Object(map);
                }
            }
            Value::Object(map) => match value {
                Some(value) => {
                    map.insert(key.to_owned(), value);
                }
                None => {
                    map.shift_remove(key);
                }
            },
            other => {
                log::trace!("ignoring key write {key:?} on {}", other.type_name());
            }
        }
    }

    /// Element at `index`, if this is an array and the index is in bounds.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Assign (`Some`) or remove (`None`) the element at `index`.
    ///
    /// Assigning past the end pads with `Null` first. Removing shifts the
    /// following elements down; an out-of-bounds removal does nothing.
    pub fn set_index(&mut self, index: usize, value: Option<Value>) {
        match self {
            Value::Null => {
                if let Some(value) = value {
                    let mut items = Vec::new();
                    if place(&mut items, index, value) {
                        *self = Value::Array(items);
                    }
                }
            }
            Value::Array(items) => match value {
                Some(value) => {
                    place(items, index, value);
                }
                None => {
                    if index < items.len() {
                        items.remove(index);
                    }
                }
            },
            other => {
                log::trace!("ignoring index write {index} on {}", other.type_name());
            }
        }
    }
}

fn place(items: &mut Vec<Value>, index: usize, value: Value) -> bool {
    if items.len() <= index && !pad_to(items, index) {
        log::trace!("ignoring index write {index}: array cannot grow that far");
        return false;
    }
    match items.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

/// Pad `items` with `Null` until `index` is in bounds. Returns `false`, leaving
/// `items` untouched, when the new length overflows or cannot be allocated.
pub(crate) fn pad_to(items: &mut Vec<Value>, index: usize) -> bool {
    let Some(len) = index.checked_add(1) else {
        return false;
    };
    let Some(additional) = len.checked_sub(items.len()) else {
        return true;
    };
    if items.try_reserve(additional).is_err() {
        return false;
    }
    items.resize(len, Value::Null);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;
    use test_case::test_case;

    #[test_case(Value::Null; "null")]
    #[test_case(Value::String("text".into()); "string")]
    #[test_case(Value::Bool(false); "bool")]
    #[test_case(Value::Number(Number::Int(10)); "number")]
    #[test_case(Value::array(); "array")]
    #[test_case(Value::object(); "empty object")]
    fn key_read_misses(value: Value) {
        assert!(value.get_key("test").is_none());
    }

    #[test_case(Value::Null; "null")]
    #[test_case(Value::String("text".into()); "string")]
    #[test_case(Value::Bool(false); "bool")]
    #[test_case(Value::Number(Number::Int(10)); "number")]
    #[test_case(Value::array(); "empty array")]
    #[test_case(Value::object(); "object")]
    fn index_read_misses(value: Value) {
        assert!(value.get_index(0).is_none());
    }

    #[test]
    fn key_read_hits() {
        let v: Value = [("test", "value")].into_iter().collect();
        assert_eq!(v.get_key("test"), Some(&Value::from("value")));
    }

    #[test]
    fn key_write_lifecycle() {
        let mut v = Value::object();
        v.set_key("123", Some("test".into()));
        assert_eq!(v.get_key("123"), Some(&Value::from("test")));
        v.set_key("123", None);
        assert_eq!(v, Value::object());

        let mut v = Value::Null;
        v.set_key("123", None);
        assert!(v.is_null());
        v.set_key("123", Some("test".into()));
        assert_eq!(v.as_object().map(Map::len), Some(1));

        let mut v = Value::from("test");
        v.set_key("123", Some(10.into()));
        assert_eq!(v, Value::from("test"));
    }

    #[test]
    fn index_write_lifecycle() {
        let mut v = Value::array();
        v.set_index(0, Some("test".into()));
        assert_eq!(v, Value::from(vec!["test"]));
        v.set_index(0, None);
        assert_eq!(v, Value::array());

        let mut v = Value::Null;
        v.set_index(0, None);
        assert!(v.is_null());
        v.set_index(0, Some("test".into()));
        assert_eq!(v, Value::from(vec!["test"]));

        let mut v = Value::from("test");
        v.set_index(0, Some(10.into()));
        assert_eq!(v, Value::from("test"));
    }

    #[test]
    fn index_write_pads_with_null() {
        let mut v = Value::Null;
        v.set_index(2, Some(true.into()));
        assert_eq!(v, Value::Array(vec![Value::Null, Value::Null, Value::Bool(true)]));

        let mut v = Value::from(vec![1]);
        v.set_index(5, None);
        assert_eq!(v, Value::from(vec![1]));
    }

    #[test_case(usize::MAX; "length overflows")]
    #[test_case(usize::MAX / 2; "allocation too large")]
    fn index_write_beyond_addressable_is_ignored(index: usize) {
        let mut v = Value::Null;
        v.set_index(index, Some(1.into()));
        assert_eq!(v, Value::Null);

        let mut v = Value::from(vec![1, 2, 3]);
        v.set_index(index, Some(9.into()));
        assert_eq!(v, Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn index_removal_shifts() {
        let mut v = Value::from(vec![1, 2, 3]);
        v.set_index(1, None);
        assert_eq!(v, Value::from(vec![1, 3]));
    }
}
