//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and response classification
//! - HTML parsing and link extraction
//! - Request rate limiting
//! - Generation-by-generation crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod scheduler;

pub use coordinator::{CrawlResult, Coordinator, PageOutcome};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use parser::{parse_html, ParsedPage};
pub use scheduler::{FetchPermit, RateLimiter};

use crate::config::CrawlConfig;
use crate::url::SeedUrl;
use crate::SitemapError;

/// Runs a complete crawl of the seed's site
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and rate limiter
/// 2. Load robots.txt for the seed host
/// 3. Fetch pages one depth generation at a time
/// 4. Return every page record found, with run statistics
///
/// # Returns
///
/// * `Ok(CrawlResult)` - Crawl finished (possibly with no records)
/// * `Err(SitemapError)` - The HTTP client could not be built
pub async fn crawl(seed: &SeedUrl, config: CrawlConfig) -> Result<CrawlResult, SitemapError> {
    let coordinator = Coordinator::new(seed, config)?;
    Ok(coordinator.run().await)
}
