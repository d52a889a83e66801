//! Robots.txt handling module
//!
//! The seed host's robots.txt is fetched once per run. Any failure to fetch
//! it leaves the crawl unrestricted.

mod parser;

pub use parser::RobotsPolicy;

use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Timeout for the single robots.txt request
const ROBOTS_TIMEOUT: Duration = Duration::from_secs(5);

/// Fetches and parses robots.txt for the host of `seed`
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `seed` - Any URL on the target host
///
/// # Returns
///
/// * `Some(RobotsPolicy)` - robots.txt answered 200 and was parsed
/// * `None` - Non-200 status, timeout or network error (logged as a warning)
pub async fn load_policy(client: &Client, seed: &Url) -> Option<RobotsPolicy> {
    let robots_url = match seed.join("/robots.txt") {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Could not build robots.txt URL from {}: {}", seed, e);
            return None;
        }
    };

    let response = match client
        .get(robots_url.as_str())
        .timeout(ROBOTS_TIMEOUT)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Could not read robots.txt from {}: {}", robots_url, e);
            return None;
        }
    };

    if response.status() != StatusCode::OK {
        tracing::warn!(
            "Failed to fetch robots.txt from {}: Status {}",
            robots_url,
            response.status().as_u16()
        );
        return None;
    }

    match response.text().await {
        Ok(body) => {
            tracing::info!("Successfully parsed robots.txt from {}", robots_url);
            Some(RobotsPolicy::from_content(&body))
        }
        Err(e) => {
            tracing::warn!("Could not read robots.txt from {}: {}", robots_url, e);
            None
        }
    }
}

/// Checks if a URL may be fetched
///
/// An absent policy permits everything.
pub fn can_fetch(policy: Option<&RobotsPolicy>, url: &str) -> bool {
    policy.map_or(true, |policy| policy.can_fetch(url))
}
