//! Tests for mapping registration and lookup.

mod utils;

use modelmap::{FieldRule, MappingDefinition, MappingRegistry, ModelMapError};
use std::sync::Arc;
use std::thread;
use utils::init_logging;

#[test]
fn lookup_of_unregistered_type_fails() {
    init_logging();
    let registry = MappingRegistry::new();
    let result = registry.lookup("Ghost");
    assert!(matches!(
        result,
        Err(ModelMapError::MappingNotFound(name)) if name == "Ghost"
    ));
}

#[test]
fn register_then_lookup_round_trips() {
    init_logging();
    let registry = MappingRegistry::new();
    registry.register(
        MappingDefinition::new("Track")
            .with_identity_key("id")
            .with_field(FieldRule::text("title", "title")),
    );

    let mapping = registry.lookup("Track").unwrap();
    assert_eq!(mapping.type_name, "Track");
    assert_eq!(mapping.identity_key_path.as_deref(), Some("id"));
    assert!(mapping.has_target("title"));
    assert!(!mapping.has_target("length"));
}

#[test]
fn re_registration_overwrites() {
    init_logging();
    let registry = MappingRegistry::new();
    registry.register(MappingDefinition::new("Track").with_field(FieldRule::text("a", "a")));
    registry.register(
        MappingDefinition::new("Track")
            .with_field(FieldRule::text("a", "a"))
            .with_field(FieldRule::text("b", "b")),
    );

    let mapping = registry.lookup("Track").unwrap();
    assert_eq!(mapping.fields.len(), 2);
}

#[test]
fn type_names_are_sorted() {
    init_logging();
    let registry = MappingRegistry::new();
    registry.register(MappingDefinition::new("Track"));
    registry.register(MappingDefinition::new("Album"));
    registry.register(MappingDefinition::new("Artist"));

    assert_eq!(registry.type_names(), vec!["Album", "Artist", "Track"]);
}

#[test]
fn concurrent_lookups_are_safe() {
    init_logging();
    let registry = Arc::new(MappingRegistry::new());
    registry.register(MappingDefinition::new("Track").with_identity_key("id"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..200 {
                    let mapping = registry.lookup("Track").unwrap();
                    assert_eq!(mapping.type_name, "Track");
                    assert!(registry.contains("Track"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
