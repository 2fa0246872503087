//! Runtime settings of a sitemap generator
//!
//! Settings are resolved from explicit values first and from the CGI-style
//! environment (`HTTP_HOST`, `HTTPS`, `DOCUMENT_ROOT`) second, so the same
//! binary can run from a web server hook or from a shell.

use crate::config::types::{Config, MAX_URLS_PER_FILE};
use crate::url::{normalize_base_url, sanitize_relative_path};
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Resolved, validated generator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSettings {
    base_url: String,
    relative_path: Option<String>,
    document_root: PathBuf,
    max_urls_per_file: usize,
    create_gzip: bool,
}

impl SitemapSettings {
    /// Creates settings for an explicit base URL
    ///
    /// The document root defaults to `DOCUMENT_ROOT`, or the current directory.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            relative_path: None,
            document_root: document_root_from_env(),
            max_urls_per_file: MAX_URLS_PER_FILE,
            create_gzip: false,
        })
    }

    /// Creates settings whose base URL is derived from `HTTP_HOST` and `HTTPS`
    pub fn from_environment() -> Result<Self, ConfigError> {
        let host = std::env::var("HTTP_HOST").ok();
        let https = std::env::var("HTTPS").ok();
        let base_url = base_url_from_host(host.as_deref(), https.as_deref())?;
        Self::new(&base_url)
    }

    /// Resolves settings from a loaded configuration file
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut settings = match &config.site.base_url {
            Some(base_url) => Self::new(base_url)?,
            None => Self::from_environment()?,
        };

        if let Some(root) = &config.site.document_root {
            settings = settings.with_document_root(root);
        }
        if let Some(path) = &config.site.relative_path {
            settings = settings.with_relative_path(path);
        }

        Ok(settings
            .with_max_urls_per_file(config.sitemap.max_urls_per_file)
            .with_gzip(config.sitemap.create_gzip))
    }

    /// Sets the sub-directory holding the sitemap files, with traversal sequences stripped
    pub fn with_relative_path(mut self, path: &str) -> Self {
        self.relative_path = sanitize_relative_path(path);
        self
    }

    /// Sets the directory the base URL is served from
    pub fn with_document_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.document_root = root.into();
        self
    }

    pub fn with_max_urls_per_file(mut self, max: usize) -> Self {
        self.max_urls_per_file = max;
        self
    }

    pub fn with_gzip(mut self, create_gzip: bool) -> Self {
        self.create_gzip = create_gzip;
        self
    }

    /// Base URL, always ending with a single `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sanitized relative path, ending with `/`
    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    pub fn max_urls_per_file(&self) -> usize {
        self.max_urls_per_file
    }

    pub fn create_gzip(&self) -> bool {
        self.create_gzip
    }

    pub(crate) fn set_max_urls_per_file(&mut self, max: usize) {
        self.max_urls_per_file = max;
    }

    pub(crate) fn set_create_gzip(&mut self, create_gzip: bool) {
        self.create_gzip = create_gzip;
    }

    /// Directory all output files are written to
    pub fn output_dir(&self) -> PathBuf {
        match &self.relative_path {
            Some(path) => self.document_root.join(path.trim_end_matches('/')),
            None => self.document_root.clone(),
        }
    }

    /// Checks that the output directory exists
    pub fn ensure_output_dir(&self) -> Result<(), ConfigError> {
        let dir = self.output_dir();
        if !dir.is_dir() {
            return Err(ConfigError::InvalidPath(format!(
                "Sitemap path '{}' does not exist or is not a directory",
                dir.display()
            )));
        }
        Ok(())
    }
}

/// Builds a base URL from a request host, using `https` unless `HTTPS` is unset or `off`
fn base_url_from_host(host: Option<&str>, https: Option<&str>) -> Result<String, ConfigError> {
    let host = host.map(str::trim).filter(|h| !h.is_empty()).ok_or_else(|| {
        ConfigError::Validation(
            "No base URL configured and HTTP_HOST is not set".to_string(),
        )
    })?;

    let secure = https
        .map(|v| !v.is_empty() && !v.eq_ignore_ascii_case("off"))
        .unwrap_or(false);

    Ok(format!("http{}://{}/", if secure { "s" } else { "" }, host))
}

fn document_root_from_env() -> PathBuf {
    std::env::var("DOCUMENT_ROOT")
        .ok()
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
