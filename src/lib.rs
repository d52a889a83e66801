//! Sitemap-Ripple: a single-site sitemap generator
//!
//! This crate crawls one website breadth-first from a seed URL, respecting
//! robots.txt and a request budget, and encodes the pages it finds as
//! sitemap-protocol XML (chunked and gzip-compressed) plus an HTML table.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod state;
pub mod url;

use std::path::Path;
use thiserror::Error;

/// Main error type for Sitemap-Ripple operations
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Invalid seed URL: {0}")]
    InvalidSeedUrl(#[from] UrlError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Sitemap-Ripple operations
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

/// How a sitemap run ended
#[derive(Debug)]
pub enum RunOutcome {
    /// Pages were found and every artifact was written
    Written {
        summary: output::SitemapSummary,
        stats: output::CrawlStatistics,
    },

    /// The crawl found nothing to record; no files were written
    Empty { stats: output::CrawlStatistics },
}

/// Crawls the site behind `seed` and writes its sitemaps into `output_dir`
///
/// The directory is created if needed, but only once there is something to
/// write: an empty crawl leaves the filesystem untouched.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use sitemap_ripple::config::CrawlConfig;
/// use sitemap_ripple::url::validate_seed_url;
/// use sitemap_ripple::{generate_sitemap, RunOutcome};
///
/// # async fn example() -> sitemap_ripple::Result<()> {
/// let seed = validate_seed_url("https://example.com")?;
/// match generate_sitemap(&seed, CrawlConfig::default(), Path::new("example.com")).await? {
///     RunOutcome::Written { summary, .. } => println!("{} URLs", summary.url_count),
///     RunOutcome::Empty { .. } => println!("No URLs found to include in sitemap"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn generate_sitemap(
    seed: &crate::url::SeedUrl,
    config: config::CrawlConfig,
    output_dir: &Path,
) -> Result<RunOutcome> {
    let max_urls_per_sitemap = config.max_urls_per_sitemap;
    let result = crawler::crawl(seed, config).await?;

    if result.records.is_empty() {
        tracing::warn!("No URLs found to include in sitemap");
        return Ok(RunOutcome::Empty {
            stats: result.stats,
        });
    }

    let generated = chrono::Local::now().date_naive();
    let summary = output::write_sitemaps(
        result.records,
        seed.as_str(),
        output_dir,
        max_urls_per_sitemap,
        generated,
    )?;

    Ok(RunOutcome::Written {
        summary,
        stats: result.stats,
    })
}

// Re-export commonly used types
pub use config::CrawlConfig;
pub use state::{ChangeFreq, FrontierItem, PageRecord, VisitedSet};
pub use crate::url::{canonicalize, validate_seed_url, SeedUrl};
