//! Robots.txt maintenance module
//!
//! This module rewrites the `robots.txt` next to the generated sitemaps so
//! that its `Sitemap:` directives point at the current sitemap or sitemap
//! index, and warns when the file's own rules hide a sitemap from crawlers.

mod rewrite;
mod rules;

pub use rewrite::rewrite_robots;
pub use rules::RobotsRules;

use crate::Result;
use std::path::Path;
use tracing::{info, warn};

/// File name of the robots file inside the output directory
pub const ROBOTS_FILE: &str = "robots.txt";

/// Content used when no robots.txt exists yet
pub const DEFAULT_ROBOTS: &str = "User-agent: *\nDisallow:\n";

/// Directive prefix replaced on every rewrite
pub const SITEMAP_DIRECTIVE: &str = "Sitemap:";

/// Rewrites `dir/robots.txt` so it advertises `sitemap_urls`
///
/// The file is handled as raw bytes, so lines in any encoding survive the
/// rewrite unchanged.
///
/// # Arguments
///
/// * `dir` - Directory holding robots.txt
/// * `sitemap_urls` - Absolute sitemap URLs, in the order they should appear
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The content written
/// * `Err(SitemapError)` - Reading or writing the file failed
pub fn update_robots_file(dir: &Path, sitemap_urls: &[String]) -> Result<Vec<u8>> {
    let path = dir.join(ROBOTS_FILE);

    let existing = if path.exists() {
        Some(std::fs::read(&path)?)
    } else {
        None
    };

    let content = rewrite_robots(existing.as_deref(), sitemap_urls);
    std::fs::write(&path, &content)?;

    info!(
        "Updated {} with {} sitemap directive(s)",
        path.display(),
        sitemap_urls.len()
    );

    let rules = RobotsRules::from_content(&String::from_utf8_lossy(&content));
    for url in rules.blocked(sitemap_urls) {
        warn!("{} is disallowed for crawlers by {}", url, path.display());
    }

    Ok(content)
}
