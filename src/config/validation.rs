use crate::config::types::CrawlConfig;
use crate::ConfigError;

/// Sitemap protocol ceiling on URLs per document
const SITEMAP_PROTOCOL_MAX_URLS: usize = 50_000;

/// Validates the entire configuration
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_limits(config)?;
    validate_patterns(config)?;
    validate_transport(config)?;
    Ok(())
}

/// Validates chunking, concurrency and rate limits
fn validate_limits(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.max_urls_per_sitemap < 1 || config.max_urls_per_sitemap > SITEMAP_PROTOCOL_MAX_URLS
    {
        return Err(ConfigError::Validation(format!(
            "max_urls_per_sitemap must be between 1 and {}, got {}",
            SITEMAP_PROTOCOL_MAX_URLS, config.max_urls_per_sitemap
        )));
    }

    if config.max_concurrent_requests < 1 || config.max_concurrent_requests > 100 {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_requests must be between 1 and 100, got {}",
            config.max_concurrent_requests
        )));
    }

    if config.requests_per_second < 1 {
        return Err(ConfigError::Validation(format!(
            "requests_per_second must be >= 1, got {}",
            config.requests_per_second
        )));
    }

    Ok(())
}

/// Validates exclusion patterns
fn validate_patterns(config: &CrawlConfig) -> Result<(), ConfigError> {
    // An empty pattern is a substring of every URL.
    if config.exclude_patterns.iter().any(|p| p.is_empty()) {
        return Err(ConfigError::Validation(
            "exclude_patterns cannot contain an empty pattern".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_transport(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    Ok(())
}
