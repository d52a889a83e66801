//! Configuration module for Sitemap-Ripple
//!
//! This module holds the typed crawl configuration, its defaults, and the
//! optional TOML override file.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_ripple::config::load_config_or_default;
//!
//! let config = load_config_or_default(None).unwrap();
//! println!("Crawler will use max depth: {}", config.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::CrawlConfig;

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, DEFAULT_CONFIG_FILE};
