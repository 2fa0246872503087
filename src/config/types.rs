use crate::url::UrlSpec;
use serde::Deserialize;

/// Default and maximum number of URLs per sitemap file
pub const MAX_URLS_PER_FILE: usize = 50_000;

/// Main configuration structure for Sumi-Sitemap
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// URLs to include, in output order
    #[serde(default, rename = "url")]
    pub urls: Vec<UrlSpec>,
}

/// Where the site lives and where files are written
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Public base URL; falls back to `HTTP_HOST` when absent
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,

    /// Directory the base URL is served from; falls back to `DOCUMENT_ROOT`
    #[serde(rename = "document-root")]
    pub document_root: Option<String>,

    /// Sub-directory (relative to both) holding the sitemap files
    #[serde(rename = "relative-path")]
    pub relative_path: Option<String>,
}

/// Sitemap generation behavior
#[derive(Debug, Clone, Deserialize)]
pub struct SitemapConfig {
    /// Maximum number of URLs per sitemap file
    #[serde(rename = "max-urls-per-file", default = "default_max_urls")]
    pub max_urls_per_file: usize,

    /// Write a gzip copy of a single sitemap file
    #[serde(rename = "create-gzip", default)]
    pub create_gzip: bool,

    /// Rewrite robots.txt after the sitemap files
    #[serde(rename = "update-robots", default = "default_true")]
    pub update_robots: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            max_urls_per_file: MAX_URLS_PER_FILE,
            create_gzip: false,
            update_robots: true,
        }
    }
}

fn default_max_urls() -> usize {
    MAX_URLS_PER_FILE
}

fn default_true() -> bool {
    true
}
