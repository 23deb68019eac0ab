//! json-tree: an owned JSON value tree and the ways to reach into it.
//!
//! - [`Value`] / [`Number`]: the tree, with tag-exact equality and
//!   order-insensitive object hashing
//! - typed getters/setters and single-level key/index subscripts
//! - [`Pointer`]: RFC 6901 JSON Pointer get/set with scaffold creation
//! - bridging to `serde_json::Value` and serde encode/decode
pub mod access;
pub mod bridge;
pub mod codec;
pub mod error;
pub mod literals;
pub mod pointer;
pub mod subscript;
pub mod value;

pub use error::{ConversionError, DecodeError, PointerError};
pub use pointer::{Pointer, APPEND_MARKER, escape_token, unescape_token};
pub use value::{Map, Number, Value};
