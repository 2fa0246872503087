use crate::config::types::Config;
use crate::config::validation::validate;
use crate::url::UrlSpec;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sumi_sitemap::config::load_config;
///
/// let config = load_config(Path::new("sitemap.toml")).unwrap();
/// println!("URLs per file: {}", config.sitemap.max_urls_per_file);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at start-up so a generated sitemap can be traced back to the
/// configuration that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(hash_content(&content))
}

/// Loads a configuration and returns both the config and its hash
///
/// The file is read once; the hash covers exactly the text that was parsed.
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, hash_content(&content)))
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Loads a plain-text URL list
///
/// One entry per line: `path[\tlastmod[\tchangefreq[\tpriority]]]`. Blank
/// lines and lines starting with `#` are skipped.
pub fn load_url_list(path: &Path) -> Result<Vec<UrlSpec>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_url_list(&content))
}

/// Parses the text of a URL list
pub fn parse_url_list(content: &str) -> Vec<UrlSpec> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|line| {
            let mut fields = line.split('\t').map(str::trim);
            let field = |f: Option<&str>| f.filter(|v| !v.is_empty()).map(str::to_string);

            let path = fields.next().unwrap_or_default().to_string();
            UrlSpec {
                path,
                last_modified: field(fields.next()),
                change_frequency: field(fields.next()),
                priority: field(fields.next()),
            }
        })
        .collect()
}
