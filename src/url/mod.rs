//! URL handling module for Sitemap-Ripple
//!
//! This module provides seed validation, link canonicalization against the
//! seed host, and the link filter applied to newly discovered URLs.

mod filter;
mod normalize;

// Re-export main functions
pub use filter::LinkFilter;
pub use normalize::{canonicalize, host_key, validate_seed_url, SeedUrl};
