use serde::Deserialize;

/// Crawl and encoding configuration
///
/// Every field has a default, so a config file only needs the keys it wants
/// to override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Maximum number of URLs per sitemap chunk
    pub max_urls_per_sitemap: usize,

    /// Maximum number of fetches in flight at once
    pub max_concurrent_requests: usize,

    /// Sustained request rate ceiling against the target host
    pub requests_per_second: u32,

    /// Maximum link depth from the seed page
    pub max_depth: u32,

    /// URLs containing any of these substrings are never followed
    pub exclude_patterns: Vec<String>,

    /// A followed URL must end with one of these suffixes
    pub valid_extensions: Vec<String>,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-request timeout for page fetches (seconds)
    pub request_timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_urls_per_sitemap: 50_000,
            max_concurrent_requests: 10,
            requests_per_second: 2,
            max_depth: 3,
            exclude_patterns: ["login", "admin", "wp-admin", "logout"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            valid_extensions: [".html", ".php", ".asp", ".aspx", ""]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            user_agent: "SitemapGenerator/2.0".to_string(),
            request_timeout_secs: 30,
        }
    }
}
