//! Key-path traversal over raw data
//!
//! Raw data arrives as already-parsed `serde_json::Value` trees; the
//! concrete wire encoding is the caller's concern. Key paths are
//! dot-separated segments that index into maps by key and into sequences
//! by unsigned integer, e.g. `"album.tracks.0.id"`.

use crate::model::IdentityValue;
use serde_json::Value;

/// Resolve a dot-separated key path against a raw value.
///
/// Returns `None` when any segment is absent, indexes a non-container, or
/// names a sequence position that is not an unsigned integer.
#[must_use]
pub fn value_at_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Extract an identity value from a raw entry at the given key path.
///
/// Only integers and text qualify; anything else (including floats and
/// compound values) counts as a missing identity.
#[must_use]
pub fn identity_at_path(root: &Value, path: &str) -> Option<IdentityValue> {
    match value_at_path(root, path)? {
        Value::Number(number) => number.as_i64().map(IdentityValue::Int),
        Value::String(text) => Some(IdentityValue::Text(text.clone())),
        _ => None,
    }
}

/// Human-readable name of a raw value's shape, for error messages
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a map",
    }
}
