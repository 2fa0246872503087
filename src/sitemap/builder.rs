//! Chunking of accumulated URLs into sitemap documents
//!
//! The builder is pure: it turns a slice of entries and the current settings
//! into a [`SitemapSet`] without touching the filesystem.

use crate::config::{validate_max_urls, SitemapSettings};
use crate::sitemap::types::{SitemapDocument, SitemapIndexDocument, SitemapReference, SitemapSet};
use crate::sitemap::xml::{render_sitemap_index, render_urlset};
use crate::sitemap::{GZIP_EXTENSION, SITEMAP_FILE, SITEMAP_INDEX_FILE};
use crate::url::{join_location, UrlEntry};
use crate::{Result, SitemapError};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use tracing::debug;

/// Maximum uncompressed size of one sitemap document (50 MiB)
pub const MAX_SITEMAP_BYTES: usize = 50 * 1024 * 1024;

/// Maximum number of sitemaps one index may reference
pub const MAX_SITEMAPS_PER_INDEX: usize = 1000;

/// Builds sitemap sets from URL entries
#[derive(Debug, Clone)]
pub struct SitemapBuilder<'a> {
    settings: &'a SitemapSettings,
    max_bytes: usize,
}

impl<'a> SitemapBuilder<'a> {
    pub fn new(settings: &'a SitemapSettings) -> Self {
        Self {
            settings,
            max_bytes: MAX_SITEMAP_BYTES,
        }
    }

    /// Overrides the per-document size limit
    #[cfg(test)]
    fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Builds the documents for `entries`, stamping the index with `timestamp`
    ///
    /// # Errors
    ///
    /// * `NoUrls` - `entries` is empty
    /// * `Config` - the per-file limit is zero or above 50,000
    /// * `TooManySitemaps` - more than 1,000 documents would be needed
    /// * `DocumentTooLarge` - a serialized document exceeds 50 MiB
    pub fn build(
        &self,
        entries: &[UrlEntry],
        timestamp: DateTime<FixedOffset>,
    ) -> Result<SitemapSet> {
        if entries.is_empty() {
            return Err(SitemapError::NoUrls);
        }

        let max_urls = self.settings.max_urls_per_file();
        validate_max_urls(max_urls)?;

        let count = entries.len().div_ceil(max_urls);
        if count > MAX_SITEMAPS_PER_INDEX {
            return Err(SitemapError::TooManySitemaps { count });
        }

        let multiple = count > 1;
        let mut documents = Vec::with_capacity(count);

        for (i, chunk) in entries.chunks(max_urls).enumerate() {
            let file_name = if multiple {
                numbered_file_name(i + 1)
            } else {
                SITEMAP_FILE.to_string()
            };

            let xml_body = render_urlset(chunk);
            if xml_body.len() > self.max_bytes {
                return Err(SitemapError::DocumentTooLarge {
                    file_name,
                    size: xml_body.len(),
                });
            }

            debug!(
                "Serialized {} ({} URLs, {} bytes)",
                file_name,
                chunk.len(),
                xml_body.len()
            );

            documents.push(SitemapDocument {
                file_name,
                xml_body,
                entries: chunk.to_vec(),
            });
        }

        if multiple {
            let index = self.build_index(&documents, timestamp);
            let index_url = self.location(SITEMAP_INDEX_FILE);

            Ok(SitemapSet {
                documents,
                index: Some(index),
                sitemap_url: index_url.clone(),
                robots_urls: vec![index_url],
                gzip_copy: false,
            })
        } else {
            let plain_url = self.location(SITEMAP_FILE);
            let gzip_url = format!("{}{}", plain_url, GZIP_EXTENSION);
            let gzip_copy = self.settings.create_gzip();

            let (sitemap_url, robots_urls) = if gzip_copy {
                (gzip_url.clone(), vec![plain_url, gzip_url])
            } else {
                (plain_url.clone(), vec![plain_url])
            };

            Ok(SitemapSet {
                documents,
                index: None,
                sitemap_url,
                robots_urls,
                gzip_copy,
            })
        }
    }

    fn build_index(
        &self,
        documents: &[SitemapDocument],
        timestamp: DateTime<FixedOffset>,
    ) -> SitemapIndexDocument {
        let last_modified = timestamp.to_rfc3339_opts(SecondsFormat::Secs, false);

        let references: Vec<SitemapReference> = documents
            .iter()
            .map(|doc| SitemapReference {
                file_name: doc.file_name.clone(),
                location: self.location(&doc.file_name),
                last_modified: last_modified.clone(),
            })
            .collect();

        SitemapIndexDocument {
            file_name: SITEMAP_INDEX_FILE.to_string(),
            xml_body: render_sitemap_index(&references),
            references,
        }
    }

    /// Public URL of a file in the output directory
    fn location(&self, file_name: &str) -> String {
        join_location(
            self.settings.base_url(),
            self.settings.relative_path(),
            file_name,
        )
    }
}

/// `sitemap.xml` -> `sitemap{n}.xml.gz`
fn numbered_file_name(n: usize) -> String {
    let stem = SITEMAP_FILE.trim_end_matches(".xml");
    format!("{}{}.xml{}", stem, n, GZIP_EXTENSION)
}
