//! Registry of mapping definitions
//!
//! One immutable definition per model type, looked up by name. Writes
//! happen during setup; afterwards the table is read-mostly, so a
//! read-write lock is enough.

use super::mapping::MappingDefinition;
use crate::error::{ModelMapError, Result};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// Stores one mapping definition per model type.
///
/// Inject a registry where it is needed rather than reaching for a global;
/// lookups are safe from any number of threads while registration is
/// expected only at setup time.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    table: RwLock<FxHashMap<String, Arc<MappingDefinition>>>,
}

impl MappingRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the definition under its type name. Last write wins.
    pub fn register(&self, definition: MappingDefinition) {
        log::debug!(
            "registering mapping for '{}' ({} field rules)",
            definition.type_name,
            definition.fields.len()
        );
        let name = definition.type_name.clone();
        let mut table = self.table.write().unwrap_or_else(|e| e.into_inner());
        table.insert(name, Arc::new(definition));
    }

    /// Look up the definition for a type name.
    pub fn lookup(&self, type_name: &str) -> Result<Arc<MappingDefinition>> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table
            .get(type_name)
            .cloned()
            .ok_or_else(|| ModelMapError::MappingNotFound(type_name.to_string()))
    }

    /// Whether a definition is registered under the type name
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table.contains_key(type_name)
    }

    /// Registered type names, sorted
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        let table = self.table.read().unwrap_or_else(|e| e.into_inner());
        table.keys().cloned().sorted().collect()
    }
}
