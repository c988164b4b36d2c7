//! Recursive application of mapping definitions to model objects
//!
//! The engine walks a mapping's field rules in declaration order and
//! mutates the target in place. Semantics are merge/upsert: a source key
//! absent from the raw data skips its rule and preserves the current
//! field value, and a failed coercion is collected rather than aborting
//! the import. Nested rules recurse through the related type's mapping;
//! recursion is bounded by the declared relationship graph, which a
//! correct mapping set keeps acyclic. The engine performs no runtime
//! cycle detection.

use crate::coerce::{self, CoerceOptions, CoercionError};
use crate::config::ImporterConfig;
use crate::error::{ModelMapError, Result};
use crate::model::{IdentityValue, ImportCollection, ImportTarget};
use crate::raw;
use crate::schema::{FieldKind, FieldRule, MappingDefinition, MappingRegistry};
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Applies mapping definitions to model objects.
pub struct ImportEngine<'a> {
    registry: &'a MappingRegistry,
    config: ImporterConfig,
}

impl<'a> ImportEngine<'a> {
    /// Create an engine over a registry and a set of global defaults
    pub fn new(registry: &'a MappingRegistry, config: ImporterConfig) -> Self {
        Self { registry, config }
    }

    /// Import raw data into `target`, resolving the mapping from the
    /// target's type name.
    ///
    /// Returns the accumulated non-fatal issues; the only hard failure is
    /// an unregistered top-level mapping.
    pub fn import(
        &self,
        raw_data: &Value,
        target: &mut dyn ImportTarget,
    ) -> Result<Vec<ModelMapError>> {
        let mapping = self.registry.lookup(target.type_name())?;
        Ok(self.import_with_mapping(raw_data, target, &mapping))
    }

    /// Import raw data into `target` using an explicit mapping.
    pub fn import_with_mapping(
        &self,
        raw_data: &Value,
        target: &mut dyn ImportTarget,
        mapping: &MappingDefinition,
    ) -> Vec<ModelMapError> {
        let mut issues = Vec::new();
        self.apply_mapping(raw_data, target, mapping, "", &mut issues);
        log::debug!(
            "imported '{}' with {} issue(s)",
            mapping.type_name,
            issues.len()
        );
        issues
    }

    fn apply_mapping(
        &self,
        raw_data: &Value,
        target: &mut dyn ImportTarget,
        mapping: &MappingDefinition,
        prefix: &str,
        issues: &mut Vec<ModelMapError>,
    ) {
        for rule in &mapping.fields {
            // An absent source key preserves the current field value
            let Some(value) = raw::value_at_path(raw_data, &rule.key_path) else {
                continue;
            };
            match &rule.kind {
                FieldKind::Scalar(kind) => {
                    let options = self.scalar_options(rule, mapping);
                    match coerce::coerce_scalar(value, *kind, &options) {
                        Ok(coerced) => target.set_field(&rule.target, coerced),
                        Err(error) => issues.push(coercion_issue(prefix, &rule.target, error)),
                    }
                }
                FieldKind::Date { format } => {
                    let options = self.date_options(format.as_deref(), mapping);
                    match coerce::coerce_date(value, &options) {
                        Ok(coerced) => target.set_field(&rule.target, coerced),
                        // The field keeps its prior value; garbage never
                        // overwrites an existing date
                        Err(error) => issues.push(coercion_issue(prefix, &rule.target, error)),
                    }
                }
                FieldKind::NestedObject { type_name } => {
                    self.import_nested_object(value, target, rule, type_name, prefix, issues);
                }
                FieldKind::NestedCollection { type_name } => {
                    self.import_nested_collection(value, target, rule, type_name, prefix, issues);
                }
            }
        }
    }

    fn import_nested_object(
        &self,
        value: &Value,
        target: &mut dyn ImportTarget,
        rule: &FieldRule,
        type_name: &str,
        prefix: &str,
        issues: &mut Vec<ModelMapError>,
    ) {
        if !value.is_object() {
            issues.push(ModelMapError::Coercion {
                field: join_field(prefix, &rule.target),
                reason: format!(
                    "expected a map for a nested object, found {}",
                    raw::kind_name(value)
                ),
            });
            return;
        }
        let Ok(related) = self.registry.lookup(type_name) else {
            issues.push(ModelMapError::MappingNotFound(type_name.to_string()));
            return;
        };
        let Some(child) = target.nested_object(&rule.target) else {
            log::debug!("target exposes no nested object field '{}'", rule.target);
            return;
        };
        let child_prefix = join_field(prefix, &rule.target);
        self.apply_mapping(value, child, &related, &child_prefix, issues);
    }

    fn import_nested_collection(
        &self,
        value: &Value,
        target: &mut dyn ImportTarget,
        rule: &FieldRule,
        type_name: &str,
        prefix: &str,
        issues: &mut Vec<ModelMapError>,
    ) {
        let Value::Array(elements) = value else {
            issues.push(ModelMapError::Coercion {
                field: join_field(prefix, &rule.target),
                reason: format!(
                    "expected a sequence for a nested collection, found {}",
                    raw::kind_name(value)
                ),
            });
            return;
        };
        let Ok(related) = self.registry.lookup(type_name) else {
            issues.push(ModelMapError::MappingNotFound(type_name.to_string()));
            return;
        };
        let Some(collection) = target.nested_collection(&rule.target) else {
            log::debug!("target exposes no nested collection field '{}'", rule.target);
            return;
        };
        let collection_prefix = join_field(prefix, &rule.target);

        match related.identity_key_path.as_deref() {
            Some(key_path) => {
                // Diffable collection: resolve each entry against the
                // existing elements by identity, creating when absent
                let mut by_identity: FxHashMap<IdentityValue, usize> =
                    FxHashMap::with_capacity_and_hasher(collection.len(), Default::default());
                for index in 0..collection.len() {
                    if let Some(identity) = collection.identity_at(index, key_path) {
                        by_identity.insert(identity, index);
                    }
                }
                for (position, element) in elements.iter().enumerate() {
                    let element_prefix = format!("{collection_prefix}[{position}]");
                    let index = match raw::identity_at_path(element, key_path) {
                        Some(identity) => match by_identity.get(&identity) {
                            Some(&existing) => existing,
                            None => {
                                let created = append_element(collection);
                                by_identity.insert(identity, created);
                                created
                            }
                        },
                        None => {
                            // Entry without an identity still imports, but
                            // into a fresh element, and the gap is surfaced
                            issues.push(ModelMapError::MissingIdentity {
                                entry_index: position,
                            });
                            append_element(collection)
                        }
                    };
                    let child = collection.get_mut(index);
                    self.apply_mapping(element, child, &related, &element_prefix, issues);
                }
            }
            None => {
                // No identity key: every entry gets a fresh element
                for (position, element) in elements.iter().enumerate() {
                    let element_prefix = format!("{collection_prefix}[{position}]");
                    let child = collection.push_new();
                    self.apply_mapping(element, child, &related, &element_prefix, issues);
                }
            }
        }
    }

    fn scalar_options(
        &self,
        rule: &FieldRule,
        mapping: &MappingDefinition,
    ) -> CoerceOptions<'_> {
        CoerceOptions {
            date_formats: Vec::new(),
            decode_html: rule
                .decode_html
                .or(mapping.decode_html)
                .unwrap_or(self.config.decode_html),
        }
    }

    fn date_options<'s>(
        &'s self,
        field_format: Option<&'s str>,
        mapping: &'s MappingDefinition,
    ) -> CoerceOptions<'s> {
        let mut date_formats = Vec::new();
        if let Some(format) = field_format {
            date_formats.push(format);
        }
        if let Some(format) = mapping.date_format.as_deref() {
            date_formats.push(format);
        }
        if let Some(format) = self.config.default_date_format.as_deref() {
            date_formats.push(format);
        }
        CoerceOptions {
            date_formats,
            decode_html: false,
        }
    }
}

fn append_element(collection: &mut dyn ImportCollection) -> usize {
    let _ = collection.push_new();
    collection.len() - 1
}

fn join_field(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn coercion_issue(prefix: &str, field: &str, error: CoercionError) -> ModelMapError {
    let field = join_field(prefix, field);
    log::warn!("coercion failed for field '{field}': {error}");
    ModelMapError::Coercion {
        field,
        reason: error.reason,
    }
}
