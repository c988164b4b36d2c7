//! A Rust library for importing loosely-typed nested data into graphs of
//! strongly-typed model objects, driven by declarative per-type mapping
//! definitions, and for reconciling ordered collections of such objects
//! against fresh data with minimal insert/remove/move deltas.
//!
//! The crate owns no wire format and performs no I/O: raw data arrives as
//! already-parsed [`serde_json::Value`] trees, model objects are owned by
//! the caller and mutated in place through the capability traits in
//! [`model`], and deciding when to import or diff is the caller's concern.

pub mod coerce;
pub mod config;
pub mod diff;
pub mod error;
pub mod import;
pub mod model;
pub mod raw;
pub mod schema;

// Re-export the most common types for easier use
// Core types
pub use config::ImporterConfig;
pub use error::{ModelMapError, Result};

// Mapping definitions
pub use schema::{FieldKind, FieldRule, MappingDefinition, MappingRegistry, ScalarKind};

// Model capabilities
pub use model::{FieldValue, Identified, IdentityValue, ImportCollection, ImportTarget};

// Engines
pub use diff::{DiffResult, diff};
pub use import::ImportEngine;

// Coercion and raw traversal
pub use coerce::{CoerceOptions, CoercionError, coerce_date, coerce_scalar};
pub use raw::{identity_at_path, value_at_path};
