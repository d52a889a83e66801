//! Crawl statistics
//!
//! Counters accumulated by the coordinator while merging each generation,
//! and a formatter for the end-of-run report.

use std::collections::BTreeMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of non-empty generations processed
    pub generations: u32,

    /// URLs admitted for fetching (robots-denied ones included)
    pub dispatched: u64,

    /// Pages recorded in the sitemap
    pub records: u64,

    /// Pages dropped in favour of a different canonical URL
    pub canonical_aliases: u64,

    /// URLs never requested because robots.txt disallowed them
    pub robots_denied: u64,

    /// Non-200 responses and non-HTML content
    pub skipped: u64,

    /// Transport errors
    pub failed: u64,

    /// Records per depth
    pub depth_breakdown: BTreeMap<u32, u64>,
}

impl CrawlStatistics {
    /// Counts one recorded page at `depth`
    pub fn record_page(&mut self, depth: u32) {
        self.records += 1;
        *self.depth_breakdown.entry(depth).or_insert(0) += 1;
    }

    /// Share of dispatched URLs that produced a record, as a percentage
    pub fn record_rate(&self) -> f64 {
        if self.dispatched == 0 {
            return 0.0;
        }
        (self.records as f64 / self.dispatched as f64) * 100.0
    }
}

/// Formats statistics as a plain-text report
pub fn format_statistics(stats: &CrawlStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Crawl Statistics ===\n\n");
    out.push_str(&format!("  Generations: {}\n", stats.generations));
    out.push_str(&format!("  URLs fetched: {}\n", stats.dispatched));
    out.push_str(&format!("  Pages recorded: {}\n", stats.records));
    out.push_str(&format!("  Canonical aliases: {}\n", stats.canonical_aliases));
    out.push_str(&format!("  Disallowed by robots.txt: {}\n", stats.robots_denied));
    out.push_str(&format!("  Skipped (non-200 / non-HTML): {}\n", stats.skipped));
    out.push_str(&format!("  Failed: {}\n", stats.failed));

    if !stats.depth_breakdown.is_empty() {
        out.push_str("\nPages by Depth:\n");
        for (depth, count) in &stats.depth_breakdown {
            out.push_str(&format!("  {}: {}\n", depth, count));
        }
    }

    out.push_str(&format!(
        "\nRecord Rate: {:.1}% ({} / {} URLs recorded)\n",
        stats.record_rate(),
        stats.records,
        stats.dispatched
    ));
    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    print!("{}", format_statistics(stats));
}
