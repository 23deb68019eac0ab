use thiserror::Error;

/// A pointer string that is neither empty nor `/`-prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointerError {
    #[error("malformed JSON pointer {0:?}: must be empty or start with '/'")]
    Malformed(String),
}

/// Failure converting a generic `serde_json::Value` into a [`crate::Value`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("unsupported value: {0}")]
    UnsupportedValue(serde_json::Value),
}

/// Failure decoding a [`crate::Value`] from structured input.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is well-formed but does not describe a JSON value at `path`.
    #[error("data corrupted at JSON path {path}: {message}")]
    DataCorrupted { path: String, message: String },
    /// The input text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax { line: usize, column: usize, message: String },
}
