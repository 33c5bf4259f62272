//! Configuration management for the travel tools
//!
//! Settings are layered from:
//! - Default values
//! - A configuration file (TOML, JSON, YAML)
//! - Environment variables prefixed with `TRAVEL__`
//!
//! Provider secrets are not part of this file; see [`crate::credentials`].

use crate::error::{Result, TravelError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default SerpApi search endpoint
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Default Apify API root
pub const DEFAULT_APIFY_URL: &str = "https://api.apify.com/v2";

/// Default Wikivoyage MediaWiki endpoint
pub const DEFAULT_WIKIVOYAGE_URL: &str = "https://en.wikivoyage.org/w/api.php";

/// Main configuration for the travel runtime
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Outbound provider endpoints
    #[serde(default)]
    pub providers: ProviderConfig,

    /// Agent runner settings
    #[serde(default)]
    pub agent: AgentSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON format
    #[serde(default)]
    pub json: bool,
}

/// Base URLs of the external search providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_serpapi_url")]
    pub serpapi_url: String,

    #[serde(default = "default_apify_url")]
    pub apify_url: String,

    #[serde(default = "default_wikivoyage_url")]
    pub wikivoyage_url: String,
}

/// Agent runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSettings {
    /// Agent identifier used as the sender of replies
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Channel used when an incoming event names none
    #[serde(default = "default_channel")]
    pub default_channel: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_serpapi_url() -> String {
    DEFAULT_SERPAPI_URL.to_string()
}

fn default_apify_url() -> String {
    DEFAULT_APIFY_URL.to_string()
}

fn default_wikivoyage_url() -> String {
    DEFAULT_WIKIVOYAGE_URL.to_string()
}

fn default_agent_name() -> String {
    "travel-agent".to_string()
}

fn default_channel() -> String {
    "general".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            serpapi_url: default_serpapi_url(),
            apify_url: default_apify_url(),
            wikivoyage_url: default_wikivoyage_url(),
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            default_channel: default_channel(),
        }
    }
}

/// Load configuration from a file
///
/// Supports TOML, JSON, and YAML formats based on file extension.
/// Values can be overridden with `TRAVEL__SECTION__KEY` variables.
///
/// # Example
///
/// ```no_run
/// use travel_core::config::load_config;
///
/// let config = load_config("travel.toml").unwrap();
/// println!("Agent name: {}", config.agent.name);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TravelConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TravelError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("TRAVEL").separator("__"))
        .build()?;

    let config: TravelConfig = settings.try_deserialize()?;

    tracing::info!("Configuration loaded from {}", path.display());

    Ok(config)
}

/// Load configuration with defaults if the file doesn't exist
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> TravelConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            TravelConfig::default()
        }
    }
}
