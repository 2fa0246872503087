//! URL handling module for Sumi-Sitemap
//!
//! This module provides the URL entry types stored by the accumulator and
//! location building (base URL + relative path + page path).

mod normalize;

use serde::Deserialize;

// Re-export main functions
pub use normalize::{join_location, normalize_base_url, sanitize_relative_path};

/// Maximum length of a sitemap `<loc>` value, in characters
pub const MAX_URL_LENGTH: usize = 2048;

/// A caller-supplied URL candidate, before validation
///
/// The path is relative to the configured base URL and relative path. The
/// optional fields are copied into the sitemap verbatim; empty strings are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlSpec {
    /// Page path relative to the sitemap location
    pub path: String,

    /// Last modification timestamp (`lastmod`)
    #[serde(default, rename = "lastmod")]
    pub last_modified: Option<String>,

    /// Change frequency hint (`changefreq`)
    #[serde(default, rename = "changefreq")]
    pub change_frequency: Option<String>,

    /// Relative priority (`priority`)
    #[serde(default)]
    pub priority: Option<String>,
}

impl UrlSpec {
    /// Creates a spec with only a path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_last_modified(mut self, value: impl Into<String>) -> Self {
        self.last_modified = Some(value.into());
        self
    }

    pub fn with_change_frequency(mut self, value: impl Into<String>) -> Self {
        self.change_frequency = Some(value.into());
        self
    }

    pub fn with_priority(mut self, value: impl Into<String>) -> Self {
        self.priority = Some(value.into());
        self
    }
}

impl From<&str> for UrlSpec {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// A validated URL stored in the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// Absolute page URL (`loc`), never empty
    pub location: String,

    /// Last modification timestamp
    pub last_modified: Option<String>,

    /// Change frequency hint
    pub change_frequency: Option<String>,

    /// Relative priority
    pub priority: Option<String>,
}

impl UrlEntry {
    /// Builds an entry from an already joined location and the optional fields of a spec
    ///
    /// Blank optional values are dropped.
    pub fn new(location: String, spec: &UrlSpec) -> Self {
        Self {
            location,
            last_modified: non_blank(spec.last_modified.as_deref()),
            change_frequency: non_blank(spec.change_frequency.as_deref()),
            priority: non_blank(spec.priority.as_deref()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
