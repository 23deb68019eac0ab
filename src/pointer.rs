//! RFC 6901 JSON Pointer addressing.
//!
//! A [`Pointer`] is the list of decoded reference tokens of a pointer string,
//! including the leading empty token produced by the mandatory `/` (or by
//! the empty pointer itself). That leading token only validates the shape
//! and is skipped during resolution.
//!
//! Reads never fail loudly: any structural mismatch yields `None`. Writes
//! create missing intermediate containers when assigning ("scaffolding") and
//! leave the tree untouched whenever a write cannot apply.
use std::fmt;
use std::str::FromStr;

use crate::error::PointerError;
use crate::subscript::pad_to;
use crate::value::Value;

/// Token addressing the slot one past the last array element. Write-only.
pub const APPEND_MARKER: &str = "-";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// Parse a pointer string. Returns `None` unless `s` is empty or starts
    /// with `/`.
    pub fn parse(s: &str) -> Option<Self> {
        if !s.is_empty() && !s.starts_with('/') {
            return None;
        }
        let tokens = s.split('/').map(unescape_token).collect();
        Some(Pointer { tokens })
    }

    /// Parse a pointer known to be well-formed, typically a literal.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid pointer string.
    pub fn new(s: &str) -> Self {
        match Self::parse(s) {
            Some(pointer) => pointer,
            None => panic!("invalid JSON pointer literal: {s:?}"),
        }
    }

    /// The empty pointer, addressing the whole document.
    pub fn root() -> Self {
        Pointer { tokens: vec![String::new()] }
    }

    pub fn is_root(&self) -> bool {
        self.tokens.len() == 1
    }

    /// All decoded tokens, leading empty token included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn last_token(&self) -> &str {
        self.tokens.last().map_or("", String::as_str)
    }

    /// The tokens that are actually walked during resolution.
    fn steps(&self) -> &[String] {
        &self.tokens[1..]
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::parse(s).ok_or_else(|| PointerError::Malformed(s.to_owned()))
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Re-escapes every token, so the output parses back to an equal pointer.
impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&escape_token(token))?;
        }
        Ok(())
    }
}

// ------------------------------- Escaping --------------------------------- //

/// `~1` → `/`, then `~0` → `~`. The order makes `~01` decode to `~1`.
pub fn unescape_token(raw: &str) -> String {
    raw.replace("~1", "/").replace("~0", "~")
}

/// Inverse of [`unescape_token`]: `~` → `~0`, then `/` → `~1`.
pub fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Array index denoted by `token`: ASCII digits only, no leading zero unless
/// the token is exactly `0`.
fn array_index(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes[0] == b'0' && bytes.len() > 1 {
        return None;
    }
    token.parse().ok()
}

fn addresses_array(token: &str) -> bool {
    token == APPEND_MARKER || array_index(token).is_some()
}

// ------------------------------- Resolve ---------------------------------- //

impl Value {
    /// Resolve `pointer` for reading. The root pointer yields `self`.
    pub fn pointer(&self, pointer: &Pointer) -> Option<&Value> {
        pointer.steps().iter().try_fold(self, |node, token| match node {
            Value::Array(items) => items.get(array_index(token)?),
            Value::Object(map) => map.get(token.as_str()),
            _ => None,
        })
    }

    /// Mutable counterpart of [`Value::pointer`]. Never creates anything.
    pub fn pointer_mut(&mut self, pointer: &Pointer) -> Option<&mut Value> {
        pointer.steps().iter().try_fold(self, |node, token| match node {
            Value::Array(items) => items.get_mut(array_index(token)?),
            Value::Object(map) => map.get_mut(token.as_str()),
            _ => None,
        })
    }

    /// Assign (`Some`) or delete (`None`) at `pointer`, in place.
    ///
    /// Assigning through missing or scalar nodes replaces them with an array
    /// (when the next token is an index or `-`) or an object. Deleting the
    /// root leaves `Null`; deleting an array element leaves `Null` in its
    /// slot; deleting an object member removes the key. Writes that cannot
    /// apply leave the tree as it was.
    pub fn set_pointer(&mut self, pointer: &Pointer, value: Option<Value>) {
        let root = std::mem::take(self);
        *self = write(root, pointer.steps(), value);
    }

    /// Owned form of [`Value::set_pointer`].
    pub fn with_pointer(self, pointer: &Pointer, value: Option<Value>) -> Value {
        write(self, pointer.steps(), value)
    }

    /// Read the value at `pointer` and delete it when present.
    pub fn take_pointer(&mut self, pointer: &Pointer) -> Option<Value> {
        let found = self.pointer(pointer).cloned()?;
        self.set_pointer(pointer, None);
        Some(found)
    }
}

// Rewrites `node` bottom-up: each level hands its child to the next call and
// stores whatever comes back in the same slot. Starting from `Null` with a
// non-empty path, a `Null` result means nothing could be written, so callers
// drop the placeholder they created instead of storing it.
fn write(node: Value, path: &[String], value: Option<Value>) -> Value {
    let Some((token, rest)) = path.split_first() else {
        return value.unwrap_or_default();
    };
    match node {
        Value::Array(mut items) => {
            if token == APPEND_MARKER {
                match value {
                    Some(value) => match write(Value::Null, rest, Some(value)) {
                        Value::Null if !rest.is_empty() => {
                            log::trace!("ignoring append: nothing could be placed below it")
                        }
                        child => items.push(child),
                    },
                    None => log::trace!("ignoring delete through append marker"),
                }
                return Value::Array(items);
            }
            let Some(index) = array_index(token) else {
                log::trace!("ignoring write through {token:?}: not an array index");
                return Value::Array(items);
            };
            let len = items.len();
            if value.is_some() && len <= index && !pad_to(&mut items, index) {
                log::trace!("ignoring write to index {index}: array cannot grow that far");
                return Value::Array(items);
            }
            match items.get_mut(index) {
                Some(slot) => {
                    let child = std::mem::take(slot);
                    *slot = write(child, rest, value);
                }
                None => log::trace!("ignoring delete of index {index}: out of bounds"),
            }
            // Padding is only kept when something landed in the new slot.
            if index >= len && !rest.is_empty() && items.get(index).is_some_and(Value::is_null) {
                items.truncate(len);
            }
            Value::Array(items)
        }
        Value::Object(mut map) => {
            if value.is_none() && rest.is_empty() {
                map.shift_remove(token.as_str());
                return Value::Object(map);
            }
            match map.get_mut(token.as_str()) {
                Some(slot) => {
                    let child = std::mem::take(slot);
                    *slot = write(child, rest, value);
                }
                None if value.is_some() => match write(Value::Null, rest, value) {
                    Value::Null if !rest.is_empty() => {
                        log::trace!("ignoring write below missing key {token:?}")
                    }
                    child => {
                        map.insert(token.clone(), child);
                    }
                },
                None => log::trace!("ignoring delete below missing key {token:?}"),
            }
            Value::Object(map)
        }
        scalar => match value {
            None => scalar,
            Some(value) => {
                let scaffold = if addresses_array(token) {
                    Value::array()
                } else {
                    Value::object()
                };
                match write(scaffold, path, Some(value)) {
                    Value::Array(items) if items.is_empty() => scalar,
                    Value::Object(map) if map.is_empty() => scalar,
                    written => written,
                }
            }
        },
    }
}
