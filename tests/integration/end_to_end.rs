use crate::common::{create_generator, parse_entries, root_element, sitemap_lines};
use sumi_sitemap::{SitemapError, SitemapSettings, UrlError, UrlSpec};
use tempfile::TempDir;

#[test]
fn test_three_urls_single_sitemap() {
    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);

    sitemap
        .add_urls([
            UrlSpec::new("index.php").with_change_frequency("daily"),
            UrlSpec::new("pages/page1.php"),
            UrlSpec::new("pages/page2.php"),
        ])
        .unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();

    let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert_eq!(root_element(&xml), "urlset");
    assert_eq!(parse_entries(&xml, "url").len(), 3);

    assert!(!dir.path().join("sitemap-index.xml").exists());
    assert!(!dir.path().join("sitemap.xml.gz").exists());

    let robots = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
    assert_eq!(
        sitemap_lines(&robots),
        vec!["Sitemap: https://example.com/sitemap.xml"]
    );
    assert!(robots.starts_with("User-agent: *\nDisallow:\n"));
}

#[cfg(feature = "gzip")]
#[test]
fn test_single_sitemap_with_gzip_copy() {
    use crate::common::read_gzip;

    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, true);

    sitemap.add_urls(["a.html", "b.html"]).unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();

    let plain = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    let compressed = read_gzip(&dir.path().join("sitemap.xml.gz"));
    assert_eq!(plain, compressed);

    assert_eq!(
        sitemap.generated().unwrap().sitemap_url,
        "https://example.com/sitemap.xml.gz"
    );

    let robots = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
    assert_eq!(
        sitemap_lines(&robots),
        vec![
            "Sitemap: https://example.com/sitemap.xml",
            "Sitemap: https://example.com/sitemap.xml.gz"
        ]
    );
}

#[cfg(feature = "gzip")]
#[test]
fn test_large_site_uses_index() {
    use crate::common::read_gzip;

    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);

    sitemap
        .add_urls((0..100_001).map(|i| UrlSpec::new(format!("page/{}", i))))
        .unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();

    let set = sitemap.generated().unwrap();
    let names: Vec<&str> = set.documents.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["sitemap1.xml.gz", "sitemap2.xml.gz", "sitemap3.xml.gz"]
    );

    let index_xml = std::fs::read_to_string(dir.path().join("sitemap-index.xml")).unwrap();
    assert_eq!(root_element(&index_xml), "sitemapindex");
    let references = parse_entries(&index_xml, "sitemap");
    assert_eq!(references.len(), 3);
    assert_eq!(references[0].loc, "https://example.com/sitemap1.xml.gz");
    assert!(references.iter().all(|r| r.lastmod.is_some()));

    let counts: Vec<usize> = (1..=3)
        .map(|n| {
            let xml = read_gzip(&dir.path().join(format!("sitemap{}.xml.gz", n)));
            parse_entries(&xml, "url").len()
        })
        .collect();
    assert_eq!(counts, vec![50_000, 50_000, 1]);

    let last = read_gzip(&dir.path().join("sitemap3.xml.gz"));
    assert_eq!(
        parse_entries(&last, "url")[0].loc,
        "https://example.com/page/100000"
    );

    assert!(!dir.path().join("sitemap.xml").exists());

    let robots = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
    assert_eq!(
        sitemap_lines(&robots),
        vec!["Sitemap: https://example.com/sitemap-index.xml"]
    );
}

#[test]
fn test_too_long_url_is_rejected_and_recoverable() {
    let dir = TempDir::new().unwrap();
    let mut sitemap = create_generator(&dir, 50_000, false);

    let path = "x".repeat(2049 - "https://example.com/".len());
    let err = sitemap.add_url(path.as_str()).unwrap_err();
    assert!(matches!(err, SitemapError::Url(UrlError::TooLong { .. })));
    assert!(sitemap.urls().is_empty());

    sitemap.add_url("index.html").unwrap();
    sitemap.add_url("about.html").unwrap();
    assert_eq!(sitemap.urls().len(), 2);

    sitemap.create_sitemap().unwrap();
    let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert_eq!(parse_entries(&xml, "url").len(), 2);
}

#[test]
fn test_robots_update_preserves_rules_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("robots.txt"),
        "User-agent: *\nDisallow: /admin\n\nSitemap: https://old.example.com/sitemap.xml\n",
    )
    .unwrap();

    let mut sitemap = create_generator(&dir, 50_000, false);
    sitemap.add_url("index.html").unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();
    let first = std::fs::read(dir.path().join("robots.txt")).unwrap();

    sitemap.update_robots().unwrap();
    let second = std::fs::read(dir.path().join("robots.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "User-agent: *\nDisallow: /admin\n\nSitemap: https://example.com/sitemap.xml"
    );
}

#[test]
fn test_robots_update_keeps_latin1_comment() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("robots.txt"),
        b"# caf\xe9\nUser-agent: *\nDisallow: /x\n",
    )
    .unwrap();

    let mut sitemap = create_generator(&dir, 50_000, false);
    sitemap.add_url("index.html").unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();

    assert_eq!(
        std::fs::read(dir.path().join("robots.txt")).unwrap(),
        b"# caf\xe9\nUser-agent: *\nDisallow: /x\n\nSitemap: https://example.com/sitemap.xml"
    );
}

#[test]
fn test_relative_path_output() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("maps")).unwrap();

    let settings = SitemapSettings::new("https://example.com/")
        .unwrap()
        .with_document_root(dir.path())
        .with_relative_path("./maps/");
    let mut sitemap = sumi_sitemap::Sitemap::new(settings).unwrap();

    sitemap.add_url("index.html").unwrap();
    sitemap.create_sitemap().unwrap().update_robots().unwrap();

    let xml = std::fs::read_to_string(dir.path().join("maps/sitemap.xml")).unwrap();
    assert_eq!(
        parse_entries(&xml, "url")[0].loc,
        "https://example.com/maps/index.html"
    );

    let robots = std::fs::read_to_string(dir.path().join("maps/robots.txt")).unwrap();
    assert_eq!(
        sitemap_lines(&robots),
        vec!["Sitemap: https://example.com/maps/sitemap.xml"]
    );
}

#[test]
fn test_chunk_count_property() {
    for (n, m) in [(1usize, 1usize), (7, 3), (9, 3), (10, 1), (25, 50_000)] {
        let dir = TempDir::new().unwrap();
        let mut sitemap = create_generator(&dir, m, false);
        sitemap
            .add_urls((0..n).map(|i| UrlSpec::new(format!("p{}", i))))
            .unwrap();

        let set = sitemap.build().unwrap();
        assert_eq!(set.documents.len(), n.div_ceil(m), "n={} m={}", n, m);
        assert!(set.documents.iter().all(|d| !d.is_empty() && d.len() <= m));
        assert_eq!(set.url_count(), n);
        assert_eq!(set.has_index(), set.documents.len() > 1);
        if let Some(index) = &set.index {
            assert_eq!(index.references.len(), set.documents.len());
        }

        let locations: Vec<String> = set
            .documents
            .iter()
            .flat_map(|d| d.entries.iter().map(|e| e.location.clone()))
            .collect();
        let expected: Vec<String> = (0..n).map(|i| format!("https://example.com/p{}", i)).collect();
        assert_eq!(locations, expected);
    }
}
