use crate::common::{create_generator, parse_entries, ParsedEntry};
use sumi_sitemap::UrlSpec;
use tempfile::TempDir;

#[test]
fn test_values_recoverable_from_xml() {
    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);

    sitemap
        .add_urls([
            UrlSpec::new("search?q=rust&lang=en")
                .with_last_modified("2024-03-01T10:00:00+01:00")
                .with_change_frequency("weekly")
                .with_priority("0.5"),
            UrlSpec::new("quotes/\"it's\"<b>"),
            UrlSpec::new("unicode/çağrı"),
        ])
        .unwrap();
    sitemap.create_sitemap().unwrap();

    let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains("search?q=rust&amp;lang=en"));

    let parsed = parse_entries(&xml, "url");
    assert_eq!(
        parsed,
        vec![
            ParsedEntry {
                loc: "https://example.com/search?q=rust&lang=en".to_string(),
                lastmod: Some("2024-03-01T10:00:00+01:00".to_string()),
                changefreq: Some("weekly".to_string()),
                priority: Some("0.5".to_string()),
            },
            ParsedEntry {
                loc: "https://example.com/quotes/\"it's\"<b>".to_string(),
                ..ParsedEntry::default()
            },
            ParsedEntry {
                loc: "https://example.com/unicode/çağrı".to_string(),
                ..ParsedEntry::default()
            },
        ]
    );
}

#[test]
fn test_escaped_optional_values() {
    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);

    sitemap
        .add_url(UrlSpec::new("a").with_change_frequency("daily & nightly"))
        .unwrap();
    let set = sitemap.build().unwrap();

    let parsed = parse_entries(&set.documents[0].xml_body, "url");
    assert_eq!(parsed[0].changefreq.as_deref(), Some("daily & nightly"));
}

#[test]
fn test_build_does_not_write() {
    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);
    sitemap.add_url("index.html").unwrap();

    let set = sitemap.build().unwrap();

    assert_eq!(set.documents.len(), 1);
    assert!(!dir.path().join("sitemap.xml").exists());
    assert!(sitemap.generated().is_none());
}
