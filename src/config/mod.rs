//! Configuration for the import engine.

use serde::{Deserialize, Serialize};

/// Process-wide defaults honored while importing.
///
/// Each setting can be overridden per mapping and, where it makes sense,
/// per field rule; the most specific level wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Date format tried after any field- or mapping-level format. When
    /// unset, parsing falls back to standard UTC (RFC 3339) forms.
    pub default_date_format: Option<String>,
    /// Decode HTML character references in imported text fields
    pub decode_html: bool,
}
