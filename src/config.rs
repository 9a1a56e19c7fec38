use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{PriceRange, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub listings: ListingsSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where listing snapshots come from
#[derive(Debug, Clone, Deserialize)]
pub struct ListingsSettings {
    /// "local" for the built-in dataset, "remote" for the listings API
    #[serde(default = "default_source")]
    pub source: String,
    /// Base URL of the listings API, required when source = "remote"
    pub endpoint: Option<String>,
    /// How long a remote snapshot stays cached
    pub cache_ttl_secs: Option<u64>,
}

fn default_source() -> String {
    "local".to_string()
}

impl Default for ListingsSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            endpoint: None,
            cache_ttl_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
    #[serde(default = "default_min_price")]
    pub min_price: u64,
    #[serde(default = "default_max_price")]
    pub max_price: u64,
}

impl SearchSettings {
    /// Price bounds applied when a search leaves them open
    pub fn price_defaults(&self) -> PriceRange {
        PriceRange::new(self.min_price, self.max_price)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_visible: default_max_visible(),
            min_price: default_min_price(),
            max_price: default_max_price(),
        }
    }
}

fn default_page_size() -> usize { 9 }
fn default_max_visible() -> usize { 5 }
fn default_min_price() -> u64 { DEFAULT_MIN_PRICE }
fn default_max_price() -> u64 { DEFAULT_MAX_PRICE }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with REALTY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with REALTY_)
            // e.g., REALTY_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("REALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // LISTINGS_API_URL is the conventional deployment variable for the
        // remote listings API, so honor it as an override
        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("REALTY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(endpoint) = std::env::var("LISTINGS_API_URL") {
        builder = builder
            .set_override("listings.endpoint", endpoint)?
            .set_override("listings.source", "remote")?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.page_size, 9);
        assert_eq!(search.max_visible, 5);
        assert_eq!(search.price_defaults(), PriceRange::new(0, 2_000_000));
    }

    #[test]
    fn test_default_listings_source_is_local() {
        let listings = ListingsSettings::default();
        assert_eq!(listings.source, "local");
        assert!(listings.endpoint.is_none());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}
