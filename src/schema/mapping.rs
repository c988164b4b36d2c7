//! Mapping definitions
//!
//! A mapping definition is the declarative rule set describing how raw
//! fields map onto one model type's fields. Definitions are built once
//! during setup and never mutated after registration.

use super::field::FieldRule;

/// The complete mapping for one model type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDefinition {
    /// Type name the definition is registered under
    pub type_name: String,
    /// Field rules, applied in declaration order
    pub fields: Vec<FieldRule>,
    /// Key path extracting the stable identity from raw entries and model
    /// objects; collections of this type are diffable when set
    pub identity_key_path: Option<String>,
    /// Mapping-level date format, tried after any field-specific format
    pub date_format: Option<String>,
    /// Mapping-level override of HTML-entity decoding
    pub decode_html: Option<bool>,
}

impl MappingDefinition {
    /// Create an empty mapping for a type name
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            identity_key_path: None,
            date_format: None,
            decode_html: None,
        }
    }

    /// Append a field rule
    #[must_use]
    pub fn with_field(mut self, rule: FieldRule) -> Self {
        self.fields.push(rule);
        self
    }

    /// Set the identity key path
    #[must_use]
    pub fn with_identity_key(mut self, key_path: impl Into<String>) -> Self {
        self.identity_key_path = Some(key_path.into());
        self
    }

    /// Set the mapping-level date format
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Override HTML-entity decoding for every text field of this mapping
    #[must_use]
    pub fn with_html_decoding(mut self, enabled: bool) -> Self {
        self.decode_html = Some(enabled);
        self
    }

    /// Find the rule writing to the given target field
    #[must_use]
    pub fn field_for_target(&self, target: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|rule| rule.target == target)
    }

    /// Whether any rule writes to the given target field
    #[must_use]
    pub fn has_target(&self, target: &str) -> bool {
        self.field_for_target(target).is_some()
    }
}
