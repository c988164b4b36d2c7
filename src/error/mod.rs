//! Error handling for modelmap.

use crate::model::IdentityValue;

/// Specialized error type for mapping, import, and diff operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelMapError {
    /// No mapping definition is registered under the requested type name
    #[error("no mapping registered for type '{0}'")]
    MappingNotFound(String),

    /// A raw value could not be converted to the field's kind
    #[error("field '{field}': {reason}")]
    Coercion {
        /// Dotted path of the field from the import root
        field: String,
        /// What went wrong
        reason: String,
    },

    /// The same identity value appeared more than once on one side of a
    /// diff, so elements cannot be matched unambiguously
    #[error("duplicate identity value '{identity}'")]
    DuplicateIdentity {
        /// The ambiguous identity
        identity: IdentityValue,
    },

    /// An entry yielded no identity value at the identity key path
    #[error("entry {entry_index} has no identity value")]
    MissingIdentity {
        /// Position of the entry in its collection
        entry_index: usize,
    },
}

/// Result type for modelmap operations
pub type Result<T> = std::result::Result<T, ModelMapError>;
