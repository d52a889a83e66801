use chrono::NaiveDate;
use std::fmt;

/// Sitemap `changefreq` values used by the crawler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    /// Pages within one link of the seed change daily, the rest weekly
    pub fn for_depth(depth: u32) -> Self {
        if depth <= 1 {
            Self::Daily
        } else {
            Self::Weekly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the sitemap priority for a page at `depth`
///
/// `max(0.1, 0.8 - 0.1 * depth)` with one fractional digit. Worked in tenths
/// so no float rounding leaks into the output.
///
/// # Examples
///
/// ```
/// use sitemap_ripple::state::priority_for_depth;
///
/// assert_eq!(priority_for_depth(0), "0.8");
/// assert_eq!(priority_for_depth(3), "0.5");
/// assert_eq!(priority_for_depth(10), "0.1");
/// ```
pub fn priority_for_depth(depth: u32) -> String {
    let tenths = 8u32.saturating_sub(depth).max(1);
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// One sitemap entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Canonical absolute URL of the page
    pub loc: String,

    /// Date the page was crawled
    pub lastmod: NaiveDate,

    /// Expected change frequency
    pub changefreq: ChangeFreq,

    /// Priority, formatted with one fractional digit
    pub priority: String,

    /// Link depth the page was found at
    pub depth: u32,
}

impl PageRecord {
    /// Scores a page found at `depth` and crawled on `crawled_on`
    pub fn new(loc: impl Into<String>, depth: u32, crawled_on: NaiveDate) -> Self {
        Self {
            loc: loc.into(),
            lastmod: crawled_on,
            changefreq: ChangeFreq::for_depth(depth),
            priority: priority_for_depth(depth),
            depth,
        }
    }

    /// `lastmod` in sitemap date format (`YYYY-MM-DD`)
    pub fn lastmod_string(&self) -> String {
        self.lastmod.format("%Y-%m-%d").to_string()
    }
}
