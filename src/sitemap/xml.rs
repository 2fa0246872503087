//! XML serialization of sitemap and sitemap index documents
//!
//! Documents follow the sitemaps.org 0.9 schemas. Every text value is
//! entity-escaped.

use crate::sitemap::types::SitemapReference;
use crate::url::UrlEntry;
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Namespace of both document types
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Renders a `urlset` document for the given entries
pub fn render_urlset(entries: &[UrlEntry]) -> String {
    // Roughly 100 bytes of markup per entry on top of the location
    let estimate = entries.iter().map(|e| e.location.len() + 100).sum::<usize>() + 512;
    let mut xml = String::with_capacity(estimate);

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&root_open("urlset", "sitemap.xsd"));
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        push_element(&mut xml, "loc", &entry.location);
        if let Some(lastmod) = &entry.last_modified {
            push_element(&mut xml, "lastmod", lastmod);
        }
        if let Some(changefreq) = &entry.change_frequency {
            push_element(&mut xml, "changefreq", changefreq);
        }
        if let Some(priority) = &entry.priority {
            push_element(&mut xml, "priority", priority);
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Renders a `sitemapindex` document for the given references
pub fn render_sitemap_index(references: &[SitemapReference]) -> String {
    let mut xml = String::new();

    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&root_open("sitemapindex", "siteindex.xsd"));
    xml.push('\n');

    for reference in references {
        xml.push_str("  <sitemap>\n");
        push_element(&mut xml, "loc", &reference.location);
        push_element(&mut xml, "lastmod", &reference.last_modified);
        xml.push_str("  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

fn root_open(name: &str, schema: &str) -> String {
    format!(
        r#"<{name} xmlns:xsi="{xsi}" xsi:schemaLocation="{ns} {ns}/{schema}" xmlns="{ns}">"#,
        name = name,
        xsi = XSI_NAMESPACE,
        ns = SITEMAP_NAMESPACE,
        schema = schema,
    )
}

fn push_element(xml: &mut String, name: &str, value: &str) {
    xml.push_str("    <");
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape(value));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}
