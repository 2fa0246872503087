//! Evaluation of robots.txt rules
//!
//! Used after rewriting robots.txt to spot sitemaps that the file itself
//! forbids crawlers to fetch.

use robotstxt::DefaultMatcher;

/// Agent token with no group of its own, so only `User-agent: *` rules apply
const GENERIC_AGENT: &str = "SumiSitemapCheck";

/// robots.txt content that can be queried for access rules
#[derive(Debug, Clone)]
pub struct RobotsRules {
    content: String,
}

impl RobotsRules {
    /// Wraps raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Checks if a URL is allowed for the given user agent
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }

    /// Returns the URLs that the `*` group disallows
    pub fn blocked<'a>(&self, urls: &'a [String]) -> Vec<&'a str> {
        urls.iter()
            .map(String::as_str)
            .filter(|url| !self.is_allowed(url, GENERIC_AGENT))
            .collect()
    }
}
