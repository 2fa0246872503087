use crate::ConfigError;
use ::url::Url;

/// Path-traversal sequences removed from a relative path, applied in order
const TRAVERSAL_SEQUENCES: &[&str] = &["../", "..", "./"];

/// Validates a base URL and normalizes it to end with exactly one slash
///
/// The URL must parse, use the `http` or `https` scheme and have a host. Runs
/// of slashes in its path are collapsed; the caller's spelling is kept
/// otherwise (no host lowercasing, no percent-encoding).
///
/// # Examples
///
/// ```
/// use sumi_sitemap::url::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("http://localhost/site//").unwrap(),
///     "http://localhost/site/"
/// );
/// assert_eq!(
///     normalize_base_url("https://example.com/shop//en").unwrap(),
///     "https://example.com/shop/en/"
/// );
/// ```
pub fn normalize_base_url(base_url: &str) -> Result<String, ConfigError> {
    let trimmed = base_url.trim();

    let url = Url::parse(trimmed)
        .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", trimmed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "'{}' has no host",
            trimmed
        )));
    }

    let base = trimmed.trim_end_matches('/');
    let (authority, path) = split_authority(base);
    Ok(format!("{}{}/", authority, collapse_slashes(path)))
}

/// Splits `scheme://host[:port]` from the rest of a base URL
fn split_authority(base: &str) -> (&str, &str) {
    let Some(scheme_end) = base.find("://").map(|i| i + 3) else {
        return (base, "");
    };
    match base[scheme_end..].find('/') {
        Some(offset) => base.split_at(scheme_end + offset),
        None => (base, ""),
    }
}

/// Strips path-traversal sequences from a relative sitemap path
///
/// Returns the cleaned path with a single trailing slash, or `None` when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use sumi_sitemap::url::sanitize_relative_path;
///
/// assert_eq!(sanitize_relative_path("../maps"), Some("maps/".to_string()));
/// assert_eq!(sanitize_relative_path("./"), None);
/// ```
pub fn sanitize_relative_path(path: &str) -> Option<String> {
    let mut cleaned = path.trim().to_string();
    for sequence in TRAVERSAL_SEQUENCES {
        cleaned = cleaned.replace(sequence, "");
    }

    let segments: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    Some(format!("{}/", segments.join("/")))
}

/// Builds an absolute location from a base URL, an optional relative path and a page path
///
/// Runs of slashes in the path part are collapsed; the query string and
/// fragment are copied unchanged.
///
/// # Examples
///
/// ```
/// use sumi_sitemap::url::join_location;
///
/// let loc = join_location("https://example.com/", Some("maps/"), "/pages//a.html");
/// assert_eq!(loc, "https://example.com/maps/pages/a.html");
/// ```
pub fn join_location(base_url: &str, relative_path: Option<&str>, path: &str) -> String {
    let tail = format!("{}{}", relative_path.unwrap_or(""), path);

    let split_at = tail.find(['?', '#']).unwrap_or(tail.len());
    let (path_part, rest) = tail.split_at(split_at);
    let collapsed = collapse_slashes(path_part);

    format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        collapsed.trim_start_matches('/'),
        rest
    )
}

/// Replaces every run of `/` with a single `/`
fn collapse_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut previous_slash = false;

    for c in path.chars() {
        if c == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        result.push(c);
    }

    result
}
