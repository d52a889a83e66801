use std::collections::HashSet;
use url::Url;

/// A URL queued for fetching, with its distance from the seed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierItem {
    /// Canonical URL to fetch
    pub url: Url,

    /// Link depth (the seed is depth 0)
    pub depth: u32,
}

impl FrontierItem {
    pub fn new(url: Url, depth: u32) -> Self {
        Self { url, depth }
    }

    /// The item one link further from the seed
    pub fn child(&self, url: Url) -> Self {
        Self {
            url,
            depth: self.depth + 1,
        }
    }
}

/// Set of canonical URL strings seen during a run
///
/// Only grows. A URL is inserted before its fetch is dispatched, so the same
/// URL is never scheduled twice, even when it is discovered by several pages
/// of one generation.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL as visited
    ///
    /// Returns `true` if the URL was not already present.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
