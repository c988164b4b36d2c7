//! Typed value vocabulary shared by coercion, import, and diff.

use chrono::{DateTime, Utc};
use std::fmt;

/// A strongly-typed field value produced by coercion.
///
/// `Null` carries the "zero value" semantics: a model object receiving it
/// resets the field to its natural empty state (empty string, 0, `None`).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent or explicit null; resets the field to its zero value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Decimal value
    Float(f64),
    /// Text value
    Text(String),
    /// Date value, always UTC
    Date(DateTime<Utc>),
}

impl FieldValue {
    /// Whether this value is the null/zero marker
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Narrow this value to an identity, if it is identity-shaped.
    ///
    /// Only integers and text make stable identities; floats and the
    /// remaining kinds yield `None`.
    #[must_use]
    pub fn as_identity(&self) -> Option<IdentityValue> {
        match self {
            FieldValue::Int(value) => Some(IdentityValue::Int(*value)),
            FieldValue::Text(value) => Some(IdentityValue::Text(value.clone())),
            _ => None,
        }
    }
}

/// A stable, comparable identity extracted from a model object or a raw
/// data entry, used to match corresponding elements across a diff.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityValue {
    /// Numeric identifier
    Int(i64),
    /// Text identifier
    Text(String),
}

impl fmt::Display for IdentityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityValue::Int(value) => write!(f, "{value}"),
            IdentityValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for IdentityValue {
    fn from(value: i64) -> Self {
        IdentityValue::Int(value)
    }
}

impl From<&str> for IdentityValue {
    fn from(value: &str) -> Self {
        IdentityValue::Text(value.to_string())
    }
}

impl From<String> for IdentityValue {
    fn from(value: String) -> Self {
        IdentityValue::Text(value)
    }
}
