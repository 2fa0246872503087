use crate::config::types::{Config, SiteConfig, SitemapConfig, MAX_URLS_PER_FILE};
use crate::url::{normalize_base_url, UrlSpec};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_sitemap_config(&config.sitemap)?;
    validate_url_entries(&config.urls)?;
    Ok(())
}

/// Checks the per-file URL limit against the sitemaps.org maximum
pub fn validate_max_urls(max_urls_per_file: usize) -> Result<(), ConfigError> {
    if max_urls_per_file == 0 {
        return Err(ConfigError::Validation(
            "max_urls_per_file must be at least 1".to_string(),
        ));
    }

    if max_urls_per_file > MAX_URLS_PER_FILE {
        return Err(ConfigError::Validation(format!(
            "Each sitemap file can contain a maximum of {} URLs, got {}",
            MAX_URLS_PER_FILE, max_urls_per_file
        )));
    }

    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if let Some(base_url) = &config.base_url {
        normalize_base_url(base_url)?;
    }

    if let Some(root) = &config.document_root {
        if root.trim().is_empty() {
            return Err(ConfigError::Validation(
                "document_root cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates sitemap configuration
fn validate_sitemap_config(config: &SitemapConfig) -> Result<(), ConfigError> {
    validate_max_urls(config.max_urls_per_file)
}

/// Validates configured URL entries
fn validate_url_entries(urls: &[UrlSpec]) -> Result<(), ConfigError> {
    for (index, url) in urls.iter().enumerate() {
        if url.path.is_empty() {
            return Err(ConfigError::Validation(format!(
                "url entry {} has an empty path",
                index + 1
            )));
        }
    }
    Ok(())
}
