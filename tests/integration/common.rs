use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use sumi_sitemap::{Sitemap, SitemapSettings};
use tempfile::TempDir;

/// Values of one `<url>` or `<sitemap>` element
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<String>,
}

/// Creates a generator writing into `dir`
pub fn create_generator(dir: &TempDir, max_urls: usize, gzip: bool) -> Sitemap {
    let settings = SitemapSettings::new("https://example.com")
        .expect("valid base URL")
        .with_document_root(dir.path())
        .with_max_urls_per_file(max_urls)
        .with_gzip(gzip);
    Sitemap::new(settings).expect("output directory exists")
}

/// Parses the entries of a sitemap or sitemap index document
///
/// `item` is `url` for sitemaps and `sitemap` for indexes.
pub fn parse_entries(xml: &str, item: &str) -> Vec<ParsedEntry> {
    let mut entries = Vec::new();
    let mut current: Option<ParsedEntry> = None;
    let mut current_tag = String::new();

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == item {
                    current = Some(ParsedEntry::default());
                }
                current_tag = name;
            }
            Ok(Event::Text(ref e)) => {
                if let Some(entry) = current.as_mut() {
                    let text = e.unescape().expect("valid escape").to_string();
                    match current_tag.as_str() {
                        "loc" => entry.loc = text,
                        "lastmod" => entry.lastmod = Some(text),
                        "changefreq" => entry.changefreq = Some(text),
                        "priority" => entry.priority = Some(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == item {
                    if let Some(entry) = current.take() {
                        entries.push(entry);
                    }
                }
                current_tag.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid XML at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }

    entries
}

/// Returns the name of the root element
pub fn root_element(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                return String::from_utf8_lossy(e.name().as_ref()).to_string();
            }
            Ok(Event::Eof) => panic!("document has no root element"),
            Err(e) => panic!("invalid XML: {}", e),
            _ => {}
        }
    }
}

/// Reads a gzip-compressed file into a string
pub fn read_gzip(path: &Path) -> String {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = std::fs::File::open(path).expect("gzip file exists");
    let mut decoder = GzDecoder::new(file);
    let mut text = String::new();
    decoder
        .read_to_string(&mut text)
        .expect("valid gzip stream");
    text
}

/// Returns the `Sitemap:` lines of a robots.txt
pub fn sitemap_lines(robots: &str) -> Vec<&str> {
    robots
        .lines()
        .filter(|line| line.starts_with("Sitemap:"))
        .collect()
}
