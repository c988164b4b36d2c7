//! Field rules for mapping definitions
//!
//! A field rule ties a source key path in the raw data to a target field
//! on the model, together with the kind of conversion to perform.

use std::fmt;

/// The scalar kinds a raw value can be coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text value
    Text,
    /// Integer value
    Integer,
    /// Decimal value
    Float,
    /// Boolean value
    Boolean,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Text => write!(f, "Text"),
            ScalarKind::Integer => write!(f, "Integer"),
            ScalarKind::Float => write!(f, "Float"),
            ScalarKind::Boolean => write!(f, "Boolean"),
        }
    }
}

/// What a field rule does with the value it finds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Coerce to a scalar and assign
    Scalar(ScalarKind),
    /// Parse as a date, optionally with a field-specific format
    Date {
        /// Format tried before the mapping-level and global defaults
        format: Option<String>,
    },
    /// Recursively import into a single related object
    NestedObject {
        /// Registered name of the related type's mapping, resolved lazily
        /// so forward and cyclic declarations are tolerated
        type_name: String,
    },
    /// Recursively import into an ordered collection of related objects
    NestedCollection {
        /// Registered name of the related type's mapping
        type_name: String,
    },
}

/// One declarative rule: where to read, where to write, how to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    /// Dot-separated source path into the raw data
    pub key_path: String,
    /// Target field name on the model
    pub target: String,
    /// Conversion kind
    pub kind: FieldKind,
    /// Per-field override of HTML-entity decoding for text values
    pub decode_html: Option<bool>,
}

impl FieldRule {
    /// Create a scalar rule
    pub fn scalar(
        key_path: impl Into<String>,
        target: impl Into<String>,
        kind: ScalarKind,
    ) -> Self {
        Self {
            key_path: key_path.into(),
            target: target.into(),
            kind: FieldKind::Scalar(kind),
            decode_html: None,
        }
    }

    /// Create a text scalar rule
    pub fn text(key_path: impl Into<String>, target: impl Into<String>) -> Self {
        Self::scalar(key_path, target, ScalarKind::Text)
    }

    /// Create a date rule
    pub fn date(key_path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key_path: key_path.into(),
            target: target.into(),
            kind: FieldKind::Date { format: None },
            decode_html: None,
        }
    }

    /// Create a nested-object rule referencing a related mapping by name
    pub fn nested_object(
        key_path: impl Into<String>,
        target: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            key_path: key_path.into(),
            target: target.into(),
            kind: FieldKind::NestedObject {
                type_name: type_name.into(),
            },
            decode_html: None,
        }
    }

    /// Create a nested-collection rule referencing a related mapping by name
    pub fn nested_collection(
        key_path: impl Into<String>,
        target: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            key_path: key_path.into(),
            target: target.into(),
            kind: FieldKind::NestedCollection {
                type_name: type_name.into(),
            },
            decode_html: None,
        }
    }

    /// Set a field-specific date format. Only meaningful on date rules.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        if let FieldKind::Date { format: slot } = &mut self.kind {
            *slot = Some(format.into());
        }
        self
    }

    /// Override HTML-entity decoding for this field
    #[must_use]
    pub fn with_html_decoding(mut self, enabled: bool) -> Self {
        self.decode_html = Some(enabled);
        self
    }
}
