//! Error types.
//!
//! Every failure is reported at the mutation site. A [`ValidationError`] always
//! names the fully-qualified attribute path, the JSON shape that was received, and
//! the forms the attribute would have accepted.

use serde_json::Value;
use thiserror::Error;

/// The category of a validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The value has the wrong JSON type or a malformed shape.
    #[error("type mismatch")]
    TypeMismatch,

    /// A number falls outside the accepted interval.
    #[error("out of range: {0}")]
    Range(String),

    /// A string is not a member of the accepted enumeration.
    #[error("unknown value '{0}'")]
    UnknownEnumValue(String),

    /// An array mixes element variants (e.g. color strings and numbers).
    #[error("array mixes {first} (element 0) with {conflicting} (element {index})")]
    MixedTypeArray {
        first: &'static str,
        conflicting: &'static str,
        index: usize,
    },

    /// A colorscale does not cover both ends of [0, 1].
    #[error("colorscale is missing the {0} endpoint")]
    IncompleteColorscale(Endpoint),
}

/// A colorscale endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Zero,
    One,
    Both,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Zero => write!(f, "0"),
            Endpoint::One => write!(f, "1"),
            Endpoint::Both => write!(f, "0 and 1"),
        }
    }
}

/// A rejected attribute assignment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "invalid value for '{path}': {kind} (received {actual}); accepted: {}",
    .accepted.join("; ")
)]
pub struct ValidationError {
    /// Fully-qualified attribute path, e.g. `parcoords.line.colorbar.x`.
    pub path: String,
    pub kind: ValidationErrorKind,
    /// JSON type and shape of the rejected value.
    pub actual: String,
    /// Human-readable list of acceptable forms.
    pub accepted: Vec<String>,
}

impl ValidationError {
    pub fn new(
        path: impl Into<String>,
        kind: ValidationErrorKind,
        value: &Value,
        accepted: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            actual: describe_value(value),
            accepted,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid argument for {container}: expected {expected}, received {received}")]
    InvalidArgument {
        container: String,
        expected: &'static str,
        received: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<confique::Error> for StyleError {
    fn from(err: confique::Error) -> Self {
        StyleError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;

/// The JSON type name of a value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Type plus a short rendering of the value, for error messages.
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of length {}", items.len()),
        Value::Object(map) => format!("object with {} key(s)", map.len()),
    }
}
