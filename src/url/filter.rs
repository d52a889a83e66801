use crate::config::CrawlConfig;

/// Binary and document suffixes that are never followed (case-insensitive)
const BLOCKED_SUFFIXES: &[&str] = &[".pdf", ".jpg", ".png", ".gif", ".zip", ".exe", ".docx"];

/// Decides whether a canonical same-host URL may enter the frontier
///
/// A URL is accepted when it:
/// - contains none of the configured exclusion substrings
/// - ends with one of the configured extensions (an empty extension
///   matches every URL)
/// - does not end with a blocked binary/document suffix
#[derive(Debug, Clone)]
pub struct LinkFilter {
    exclude_patterns: Vec<String>,
    valid_extensions: Vec<String>,
}

impl LinkFilter {
    /// Builds a filter from the crawl configuration
    pub fn new(config: &CrawlConfig) -> Self {
        Self {
            exclude_patterns: config.exclude_patterns.clone(),
            valid_extensions: config.valid_extensions.clone(),
        }
    }

    /// Returns true if the URL may be crawled
    pub fn accepts(&self, url: &str) -> bool {
        !url.is_empty()
            && !self.is_excluded(url)
            && self.has_valid_extension(url)
            && !has_blocked_suffix(url)
    }

    fn is_excluded(&self, url: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| url.contains(pattern.as_str()))
    }

    fn has_valid_extension(&self, url: &str) -> bool {
        self.valid_extensions
            .iter()
            .any(|ext| url.ends_with(ext.as_str()))
    }
}

fn has_blocked_suffix(url: &str) -> bool {
    let lowered = url.to_ascii_lowercase();
    BLOCKED_SUFFIXES
        .iter()
        .any(|suffix| lowered.ends_with(suffix))
}
