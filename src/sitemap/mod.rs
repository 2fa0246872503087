//! Sitemap generation module
//!
//! [`Sitemap`] accumulates URLs, builds them into sitemap documents, writes
//! those documents and updates robots.txt.
//!
//! # Example
//!
//! ```no_run
//! use sumi_sitemap::{Sitemap, SitemapSettings, UrlSpec};
//!
//! # fn example() -> sumi_sitemap::Result<()> {
//! let settings = SitemapSettings::new("https://example.com")?
//!     .with_document_root("/var/www/html")
//!     .with_gzip(true);
//!
//! let mut sitemap = Sitemap::new(settings)?;
//! sitemap.add_url("index.html")?;
//! sitemap.add_url(UrlSpec::new("about.html").with_priority("0.8"))?;
//! sitemap.create_sitemap()?.update_robots()?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod types;
pub mod xml;

pub use builder::{SitemapBuilder, MAX_SITEMAPS_PER_INDEX, MAX_SITEMAP_BYTES};
pub use types::{SitemapDocument, SitemapIndexDocument, SitemapReference, SitemapSet};

use crate::config::SitemapSettings;
use crate::output::{write_sitemap_set, RunStatistics};
use crate::robots::update_robots_file;
use crate::url::{join_location, UrlEntry, UrlSpec, MAX_URL_LENGTH};
use crate::{Result, SitemapError, UrlError};
use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, info};

/// Name of the single sitemap file
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Name of the sitemap index file
pub const SITEMAP_INDEX_FILE: &str = "sitemap-index.xml";

/// Suffix of compressed files
pub const GZIP_EXTENSION: &str = ".gz";

/// A sitemap generator for one site
#[derive(Debug)]
pub struct Sitemap {
    settings: SitemapSettings,
    urls: Vec<UrlEntry>,
    generated: Option<SitemapSet>,
    stats: RunStatistics,
}

impl Sitemap {
    /// Creates a generator, checking that the output directory exists
    pub fn new(settings: SitemapSettings) -> Result<Self> {
        settings.ensure_output_dir()?;

        info!(
            "Sitemap for {} will be written to {}",
            settings.base_url(),
            settings.output_dir().display()
        );

        Ok(Self {
            settings,
            urls: Vec::new(),
            generated: None,
            stats: RunStatistics::start(),
        })
    }

    pub fn settings(&self) -> &SitemapSettings {
        &self.settings
    }

    /// Changes the number of URLs per sitemap file for subsequent builds
    pub fn set_max_urls_per_file(&mut self, max: usize) {
        self.settings.set_max_urls_per_file(max);
    }

    /// Enables or disables the `.gz` copy of a single sitemap for subsequent builds
    pub fn set_create_gzip(&mut self, create_gzip: bool) {
        self.settings.set_create_gzip(create_gzip);
    }

    /// Adds one URL
    ///
    /// The location is built from the base URL, the relative path and
    /// `spec.path`. Nothing is stored when validation fails.
    ///
    /// # Errors
    ///
    /// * `UrlError::MissingPath` - the path is empty
    /// * `UrlError::TooLong` - the location exceeds 2048 characters
    pub fn add_url(&mut self, spec: impl Into<UrlSpec>) -> Result<()> {
        let spec = spec.into();
        if spec.path.is_empty() {
            return Err(UrlError::MissingPath.into());
        }

        let location = join_location(
            self.settings.base_url(),
            self.settings.relative_path(),
            &spec.path,
        );

        let length = location.chars().count();
        if length > MAX_URL_LENGTH {
            return Err(UrlError::TooLong {
                length,
                max: MAX_URL_LENGTH,
            }
            .into());
        }

        debug!("Added {}", location);
        self.urls.push(UrlEntry::new(location, &spec));
        Ok(())
    }

    /// Adds several URLs in order
    ///
    /// Each URL is added as if by [`Sitemap::add_url`]. The batch is not
    /// atomic: on error, the URLs before the failing one stay added and the
    /// rest are not processed.
    pub fn add_urls<I, T>(&mut self, urls: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<UrlSpec>,
    {
        for url in urls {
            self.add_url(url)?;
        }
        Ok(())
    }

    /// Accumulated URLs in insertion order
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    /// Builds the sitemap documents in memory, stamped with the current time
    pub fn build(&self) -> Result<SitemapSet> {
        let now = Local::now();
        self.build_at(now.with_timezone(now.offset()))
    }

    /// Builds the sitemap documents in memory with an explicit index timestamp
    pub fn build_at(&self, timestamp: DateTime<FixedOffset>) -> Result<SitemapSet> {
        SitemapBuilder::new(&self.settings).build(&self.urls, timestamp)
    }

    /// Builds and writes the sitemap files
    ///
    /// Every call replaces the previously generated set; calling it twice
    /// without adding URLs writes the same files again.
    pub fn create_sitemap(&mut self) -> Result<&mut Self> {
        let set = self.build()?;
        let written = write_sitemap_set(&set, &self.settings.output_dir())?;

        info!(
            "Generated {} sitemap file(s) for {} URLs, {} file(s) written; sitemap at {}",
            set.documents.len(),
            set.url_count(),
            written.len(),
            set.sitemap_url
        );

        self.generated = Some(set);
        Ok(self)
    }

    /// Points robots.txt at the generated sitemap
    ///
    /// # Errors
    ///
    /// * `NotGenerated` - [`Sitemap::create_sitemap`] has not succeeded yet
    pub fn update_robots(&mut self) -> Result<&mut Self> {
        let set = self.generated.as_ref().ok_or(SitemapError::NotGenerated)?;
        update_robots_file(&self.settings.output_dir(), &set.robots_urls)?;
        Ok(self)
    }

    /// The set written by the last successful [`Sitemap::create_sitemap`]
    pub fn generated(&self) -> Option<&SitemapSet> {
        self.generated.as_ref()
    }

    /// Timing and memory figures since the generator was created
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }
}
