//! Sumi-Sitemap: a sitemap and robots.txt generator
//!
//! This crate collects page URLs, chunks them into sitemaps.org-compliant
//! sitemap files (with a sitemap index when more than one file is needed),
//! optionally gzip-compresses them, and points crawlers at the result through
//! `robots.txt`.

pub mod config;
pub mod output;
pub mod robots;
pub mod sitemap;
pub mod url;

use thiserror::Error;

/// Main error type for Sumi-Sitemap operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("No URLs to write: call add_url before creating the sitemap")]
    NoUrls,

    #[error("No sitemap has been generated yet: call create_sitemap first")]
    NotGenerated,

    #[error("Sitemap set contains no documents to write")]
    NothingToWrite,

    #[error("Sitemap file {file_name} is {size} bytes, more than the 50 MiB limit; reduce the number of URLs per file")]
    DocumentTooLarge { file_name: String, size: usize },

    #[error("{count} sitemap files needed, but a sitemap index can reference at most 1000")]
    TooManySitemaps { count: usize },

    #[error("Gzip compression is not available in this build")]
    CompressionUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad classification of a [`SitemapError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad URL input
    Validation,
    /// Invalid settings or limits
    Configuration,
    /// Operation invoked out of the required order
    State,
    /// A single document is too large
    SizeLimit,
    /// Too many documents for one index
    LimitExceeded,
    /// A runtime capability is missing
    Environment,
    /// Filesystem failure
    Io,
}

impl SitemapError {
    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Url(_) => ErrorKind::Validation,
            Self::NoUrls | Self::NotGenerated | Self::NothingToWrite => ErrorKind::State,
            Self::DocumentTooLarge { .. } => ErrorKind::SizeLimit,
            Self::TooManySitemaps { .. } => ErrorKind::LimitExceeded,
            Self::CompressionUnavailable => ErrorKind::Environment,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid sitemap path: {0}")]
    InvalidPath(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("URL path is required")]
    MissingPath,

    #[error("URL length cannot exceed {max} characters, got {length}")]
    TooLong { length: usize, max: usize },
}

/// Result type alias for Sumi-Sitemap operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::{Config, SitemapSettings};
pub use sitemap::{Sitemap, SitemapDocument, SitemapIndexDocument, SitemapSet};
pub use crate::url::{UrlEntry, UrlSpec};
