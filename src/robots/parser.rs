//! Robots.txt rule evaluation using the robotstxt crate

use robotstxt::DefaultMatcher;

/// User agent token whose rule group governs the crawl
const WILDCARD_AGENT: &str = "*";

/// Parsed robots.txt rules for one host
///
/// Only the wildcard (`User-agent: *`) group applies. Allow and Disallow
/// lines are matched by path prefix, the most specific match winning.
#[derive(Debug, Clone)]
pub struct RobotsPolicy {
    /// Raw robots.txt content
    content: String,
}

impl RobotsPolicy {
    /// Creates a policy from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Checks if a URL may be fetched by a wildcard user agent
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL or path (e.g., "/page.html")
    pub fn can_fetch(&self, url: &str) -> bool {
        if self.content.trim().is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, WILDCARD_AGENT, url)
    }
}
