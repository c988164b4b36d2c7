//! Conversion of raw scalar values into typed field values
//!
//! Coercion follows widening rules: numeric-like text parses into the
//! target numeric kind, boolean-like text and numbers map onto booleans,
//! and an absent or null raw value yields [`FieldValue::Null`] (the zero
//! value) rather than an error. Date parsing walks a prioritized format
//! list before falling back to standard UTC forms.

pub mod date_utils;
pub mod html;

use crate::model::FieldValue;
use crate::raw::kind_name;
use crate::schema::ScalarKind;
use chrono::DateTime;
use date_utils::parse_date_string;
use html::decode_entities;
use serde_json::Value;
use std::fmt;

/// Options honored while coercing a single value
#[derive(Debug, Clone, Default)]
pub struct CoerceOptions<'a> {
    /// Date formats to try, highest priority first
    pub date_formats: Vec<&'a str>,
    /// Decode HTML character references in text values
    pub decode_html: bool,
}

/// A failed conversion of one raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// What went wrong
    pub reason: String,
}

impl CoercionError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for CoercionError {}

/// Coerce a raw value into the given scalar kind.
pub fn coerce_scalar(
    raw: &Value,
    kind: ScalarKind,
    options: &CoerceOptions<'_>,
) -> Result<FieldValue, CoercionError> {
    match kind {
        ScalarKind::Text => coerce_text(raw, options),
        ScalarKind::Integer => coerce_integer(raw),
        ScalarKind::Float => coerce_float(raw),
        ScalarKind::Boolean => coerce_boolean(raw),
    }
}

/// Coerce a raw value into a UTC date.
///
/// Text is parsed against `options.date_formats` in order, then standard
/// UTC forms; integral numbers are Unix-epoch seconds. Unparsable text is
/// an error so callers can leave the existing field value untouched.
pub fn coerce_date(raw: &Value, options: &CoerceOptions<'_>) -> Result<FieldValue, CoercionError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::String(text) => parse_date_string(text, &options.date_formats)
            .map(FieldValue::Date)
            .ok_or_else(|| {
                CoercionError::new(format!("'{text}' does not match any configured date format"))
            }),
        Value::Number(number) => number
            .as_i64()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
            .map(FieldValue::Date)
            .ok_or_else(|| CoercionError::new(format!("{number} is not a valid unix timestamp"))),
        other => Err(CoercionError::new(format!(
            "cannot coerce {} to Date",
            kind_name(other)
        ))),
    }
}

fn coerce_text(raw: &Value, options: &CoerceOptions<'_>) -> Result<FieldValue, CoercionError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::String(text) => Ok(FieldValue::Text(if options.decode_html {
            decode_entities(text)
        } else {
            text.clone()
        })),
        Value::Number(number) => Ok(FieldValue::Text(number.to_string())),
        Value::Bool(flag) => Ok(FieldValue::Text(flag.to_string())),
        other => Err(cannot_coerce(other, ScalarKind::Text)),
    }
}

fn coerce_integer(raw: &Value) -> Result<FieldValue, CoercionError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                return Ok(FieldValue::Int(value));
            }
            // Whole-valued floats widen; anything fractional does not
            match number.as_f64() {
                Some(float)
                    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 =>
                {
                    Ok(FieldValue::Int(float as i64))
                }
                _ => Err(CoercionError::new(format!(
                    "{number} has no integer representation"
                ))),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|_| CoercionError::new(format!("'{text}' is not an integer"))),
        Value::Bool(flag) => Ok(FieldValue::Int(i64::from(*flag))),
        other => Err(cannot_coerce(other, ScalarKind::Integer)),
    }
}

fn coerce_float(raw: &Value) -> Result<FieldValue, CoercionError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::Number(number) => number
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| CoercionError::new(format!("{number} has no float representation"))),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map(FieldValue::Float)
            .map_err(|_| CoercionError::new(format!("'{text}' is not a number"))),
        Value::Bool(flag) => Ok(FieldValue::Float(if *flag { 1.0 } else { 0.0 })),
        other => Err(cannot_coerce(other, ScalarKind::Float)),
    }
}

fn coerce_boolean(raw: &Value) -> Result<FieldValue, CoercionError> {
    match raw {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(flag) => Ok(FieldValue::Bool(*flag)),
        Value::Number(number) => Ok(FieldValue::Bool(
            number.as_f64().is_some_and(|value| value != 0.0),
        )),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(FieldValue::Bool(true)),
            "false" | "0" | "no" => Ok(FieldValue::Bool(false)),
            _ => Err(CoercionError::new(format!("'{text}' is not a boolean"))),
        },
        other => Err(cannot_coerce(other, ScalarKind::Boolean)),
    }
}

fn cannot_coerce(raw: &Value, kind: ScalarKind) -> CoercionError {
    CoercionError::new(format!("cannot coerce {} to {kind}", kind_name(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn null_yields_the_zero_marker_for_every_kind() {
        let options = CoerceOptions::default();
        for kind in [
            ScalarKind::Text,
            ScalarKind::Integer,
            ScalarKind::Float,
            ScalarKind::Boolean,
        ] {
            assert_eq!(
                coerce_scalar(&Value::Null, kind, &options),
                Ok(FieldValue::Null)
            );
        }
        assert_eq!(coerce_date(&Value::Null, &options), Ok(FieldValue::Null));
    }

    #[test]
    fn numeric_text_widens_to_integer() {
        let options = CoerceOptions::default();
        assert_eq!(
            coerce_scalar(&json!(" 42 "), ScalarKind::Integer, &options),
            Ok(FieldValue::Int(42))
        );
        assert_eq!(
            coerce_scalar(&json!(7.0), ScalarKind::Integer, &options),
            Ok(FieldValue::Int(7))
        );
        assert!(coerce_scalar(&json!(7.5), ScalarKind::Integer, &options).is_err());
        assert!(coerce_scalar(&json!("not-a-number"), ScalarKind::Integer, &options).is_err());
    }

    #[test]
    fn boolean_like_values_map_to_booleans() {
        let options = CoerceOptions::default();
        assert_eq!(
            coerce_scalar(&json!("true"), ScalarKind::Boolean, &options),
            Ok(FieldValue::Bool(true))
        );
        assert_eq!(
            coerce_scalar(&json!("0"), ScalarKind::Boolean, &options),
            Ok(FieldValue::Bool(false))
        );
        assert_eq!(
            coerce_scalar(&json!(1), ScalarKind::Boolean, &options),
            Ok(FieldValue::Bool(true))
        );
        assert!(coerce_scalar(&json!("maybe"), ScalarKind::Boolean, &options).is_err());
    }

    #[test]
    fn numbers_and_booleans_render_to_text() {
        let options = CoerceOptions::default();
        assert_eq!(
            coerce_scalar(&json!(3.5), ScalarKind::Text, &options),
            Ok(FieldValue::Text("3.5".to_string()))
        );
        assert_eq!(
            coerce_scalar(&json!(false), ScalarKind::Text, &options),
            Ok(FieldValue::Text("false".to_string()))
        );
    }

    #[test]
    fn text_decoding_is_opt_in() {
        let plain = CoerceOptions::default();
        let decoding = CoerceOptions {
            decode_html: true,
            ..Default::default()
        };
        assert_eq!(
            coerce_scalar(&json!("AC&amp;DC"), ScalarKind::Text, &plain),
            Ok(FieldValue::Text("AC&amp;DC".to_string()))
        );
        assert_eq!(
            coerce_scalar(&json!("AC&amp;DC"), ScalarKind::Text, &decoding),
            Ok(FieldValue::Text("AC&DC".to_string()))
        );
    }

    #[test]
    fn compound_values_never_coerce() {
        let options = CoerceOptions::default();
        assert!(coerce_scalar(&json!([1, 2]), ScalarKind::Integer, &options).is_err());
        assert!(coerce_scalar(&json!({"a": 1}), ScalarKind::Text, &options).is_err());
    }

    #[test]
    fn epoch_seconds_coerce_to_dates() {
        let options = CoerceOptions::default();
        assert_eq!(
            coerce_date(&json!(1_622_505_600), &options),
            Ok(FieldValue::Date(
                Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap()
            ))
        );
    }
}
