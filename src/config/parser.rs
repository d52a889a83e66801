use crate::config::types::CrawlConfig;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "sitemap_config.toml";

/// Loads and parses a configuration file from the given path
///
/// Keys missing from the file keep their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(CrawlConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<CrawlConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: CrawlConfig = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Loads the configuration, falling back to defaults
///
/// With an explicit path the file must exist. Without one,
/// `sitemap_config.toml` in the working directory is used if present.
pub fn load_config_or_default(path: Option<&Path>) -> Result<CrawlConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                tracing::info!("Using configuration from {}", default_path.display());
                load_config(default_path)
            } else {
                Ok(CrawlConfig::default())
            }
        }
    }
}
