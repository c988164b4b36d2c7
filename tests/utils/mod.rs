//! Shared fixtures for integration tests
//!
//! A small music-catalog domain: an `Album` owns an optional `Artist`
//! (nested object) and an ordered list of `Track`s (nested collection
//! keyed by id).

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use modelmap::{
    FieldRule, FieldValue, Identified, IdentityValue, ImportCollection, ImportTarget,
    MappingDefinition, MappingRegistry, ScalarKind,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artist {
    pub name: String,
    pub bio: String,
}

impl ImportTarget for Artist {
    fn type_name(&self) -> &str {
        "Artist"
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("name", FieldValue::Text(text)) => self.name = text,
            ("name", FieldValue::Null) => self.name.clear(),
            ("bio", FieldValue::Text(text)) => self.bio = text,
            ("bio", FieldValue::Null) => self.bio.clear(),
            _ => {}
        }
    }

    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "bio" => Some(FieldValue::Text(self.bio.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub seconds: i64,
}

impl ImportTarget for Track {
    fn type_name(&self) -> &str {
        "Track"
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("id", FieldValue::Int(id)) => self.id = id,
            ("title", FieldValue::Text(title)) => self.title = title,
            ("title", FieldValue::Null) => self.title.clear(),
            ("seconds", FieldValue::Int(seconds)) => self.seconds = seconds,
            ("seconds", FieldValue::Null) => self.seconds = 0,
            _ => {}
        }
    }

    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Int(self.id)),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "seconds" => Some(FieldValue::Int(self.seconds)),
            _ => None,
        }
    }
}

impl Identified for Track {
    fn identity_value(&self, key_path: &str) -> Option<IdentityValue> {
        self.field(key_path).and_then(|value| value.as_identity())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub plays: i64,
    pub rating: f64,
    pub explicit: bool,
    pub released_at: Option<DateTime<Utc>>,
    pub artist: Option<Artist>,
    pub tracks: Vec<Track>,
}

impl ImportTarget for Album {
    fn type_name(&self) -> &str {
        "Album"
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        match (field, value) {
            ("id", FieldValue::Int(id)) => self.id = id,
            ("title", FieldValue::Text(title)) => self.title = title,
            ("title", FieldValue::Null) => self.title.clear(),
            ("plays", FieldValue::Int(plays)) => self.plays = plays,
            ("plays", FieldValue::Null) => self.plays = 0,
            ("rating", FieldValue::Float(rating)) => self.rating = rating,
            ("rating", FieldValue::Null) => self.rating = 0.0,
            ("explicit", FieldValue::Bool(explicit)) => self.explicit = explicit,
            ("explicit", FieldValue::Null) => self.explicit = false,
            ("released_at", FieldValue::Date(date)) => self.released_at = Some(date),
            ("released_at", FieldValue::Null) => self.released_at = None,
            _ => {}
        }
    }

    fn field(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Int(self.id)),
            "title" => Some(FieldValue::Text(self.title.clone())),
            "plays" => Some(FieldValue::Int(self.plays)),
            "rating" => Some(FieldValue::Float(self.rating)),
            "explicit" => Some(FieldValue::Bool(self.explicit)),
            "released_at" => Some(
                self.released_at
                    .map_or(FieldValue::Null, FieldValue::Date),
            ),
            _ => None,
        }
    }

    fn nested_object(&mut self, field: &str) -> Option<&mut dyn ImportTarget> {
        match field {
            "artist" => Some(self.artist.get_or_insert_with(Artist::default)),
            _ => None,
        }
    }

    fn nested_collection(&mut self, field: &str) -> Option<&mut dyn ImportCollection> {
        match field {
            "tracks" => Some(&mut self.tracks),
            _ => None,
        }
    }
}

impl Identified for Album {
    fn identity_value(&self, key_path: &str) -> Option<IdentityValue> {
        self.field(key_path).and_then(|value| value.as_identity())
    }
}

/// Registry covering the whole fixture domain
pub fn catalog_registry() -> MappingRegistry {
    let registry = MappingRegistry::new();
    registry.register(
        MappingDefinition::new("Artist")
            .with_field(FieldRule::text("name", "name"))
            .with_field(FieldRule::text("bio", "bio")),
    );
    registry.register(
        MappingDefinition::new("Track")
            .with_identity_key("id")
            .with_field(FieldRule::scalar("id", "id", ScalarKind::Integer))
            .with_field(FieldRule::text("title", "title"))
            .with_field(FieldRule::scalar("length", "seconds", ScalarKind::Integer)),
    );
    registry.register(
        MappingDefinition::new("Album")
            .with_identity_key("id")
            .with_field(FieldRule::scalar("id", "id", ScalarKind::Integer))
            .with_field(FieldRule::text("title", "title"))
            .with_field(FieldRule::scalar("stats.plays", "plays", ScalarKind::Integer))
            .with_field(FieldRule::scalar("stats.rating", "rating", ScalarKind::Float))
            .with_field(FieldRule::scalar("explicit", "explicit", ScalarKind::Boolean))
            .with_field(FieldRule::date("released_at", "released_at"))
            .with_field(FieldRule::nested_object("artist", "artist", "Artist"))
            .with_field(FieldRule::nested_collection("tracks", "tracks", "Track")),
    );
    registry
}
