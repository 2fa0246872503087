use crate::url::UrlEntry;

/// One generated sitemap file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapDocument {
    /// File name inside the output directory
    pub file_name: String,

    /// Uncompressed XML text
    pub xml_body: String,

    /// Entries serialized into this document, in order
    pub entries: Vec<UrlEntry>,
}

impl SitemapDocument {
    /// Number of URLs in this document
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for a document without URLs, which a build never produces
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the uncompressed XML in bytes
    pub fn size(&self) -> usize {
        self.xml_body.len()
    }
}

/// A sitemap file listed in a sitemap index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapReference {
    pub file_name: String,

    /// Absolute URL of the referenced file
    pub location: String,

    /// RFC 3339 timestamp of the build
    pub last_modified: String,
}

/// The sitemap index produced when URLs span more than one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapIndexDocument {
    pub file_name: String,
    pub xml_body: String,
    pub references: Vec<SitemapReference>,
}

/// Everything produced by a single build
///
/// A set is immutable; rebuilding produces a new set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapSet {
    /// Sitemap documents in URL order
    pub documents: Vec<SitemapDocument>,

    /// Present only when there is more than one document
    pub index: Option<SitemapIndexDocument>,

    /// The URL crawlers should be pointed at
    pub sitemap_url: String,

    /// URLs to advertise in robots.txt, in order
    pub robots_urls: Vec<String>,

    /// Whether a single sitemap also gets a `.gz` copy
    pub gzip_copy: bool,
}

impl SitemapSet {
    /// Total number of URLs across all documents
    pub fn url_count(&self) -> usize {
        self.documents.iter().map(SitemapDocument::len).sum()
    }

    /// True when the set spans several files listed by an index
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }
}
