use crate::robots::{DEFAULT_ROBOTS, SITEMAP_DIRECTIVE};

/// Rebuilds robots.txt content so it advertises exactly `sitemap_urls`
///
/// Existing `Sitemap:` lines and empty lines are dropped; every other line is
/// kept byte for byte, in order, whatever its encoding. Without existing
/// content, a permissive default is used. The sitemap directives are appended
/// after a blank line.
///
/// Applying the function to its own output with the same URLs returns the
/// same bytes.
///
/// # Examples
///
/// ```
/// use sumi_sitemap::robots::rewrite_robots;
///
/// let urls = vec!["https://example.com/sitemap.xml".to_string()];
/// assert_eq!(
///     rewrite_robots(None, &urls),
///     b"User-agent: *\nDisallow:\n\nSitemap: https://example.com/sitemap.xml"
/// );
/// ```
pub fn rewrite_robots(existing: Option<&[u8]>, sitemap_urls: &[String]) -> Vec<u8> {
    let directive = SITEMAP_DIRECTIVE.as_bytes();

    let mut content = match existing {
        Some(bytes) => bytes
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty() && !line.starts_with(directive))
            .fold(Vec::with_capacity(bytes.len()), |mut acc, line| {
                acc.extend_from_slice(line);
                acc.push(b'\n');
                acc
            }),
        None => DEFAULT_ROBOTS.as_bytes().to_vec(),
    };

    for url in sitemap_urls {
        content.push(b'\n');
        content.extend_from_slice(directive);
        content.push(b' ');
        content.extend_from_slice(url.as_bytes());
    }

    content
}
