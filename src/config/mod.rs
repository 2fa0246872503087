//! Configuration module for Sumi-Sitemap
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, resolving them into [`SitemapSettings`], and reading plain-text URL
//! lists.
//!
//! # Example
//!
//! ```no_run
//! use sumi_sitemap::config::{load_config, SitemapSettings};
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sitemap.toml")).unwrap();
//! let settings = SitemapSettings::from_config(&config).unwrap();
//! println!("Writing sitemaps to {}", settings.output_dir().display());
//! ```

mod parser;
mod settings;
mod types;
mod validation;

// Re-export types
pub use settings::SitemapSettings;
pub use types::{Config, SiteConfig, SitemapConfig, MAX_URLS_PER_FILE};

// Re-export parser functions
pub use parser::{
    compute_config_hash, load_config, load_config_with_hash, load_url_list, parse_config,
    parse_url_list,
};
pub use validation::validate_max_urls;
