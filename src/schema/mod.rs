//! Declarative mapping-definition model
//!
//! A [`MappingDefinition`] holds the ordered [`FieldRule`]s for one model
//! type; the [`MappingRegistry`] owns one immutable definition per type.

pub mod field;
pub mod mapping;
pub mod registry;

pub use field::{FieldKind, FieldRule, ScalarKind};
pub use mapping::MappingDefinition;
pub use registry::MappingRegistry;
