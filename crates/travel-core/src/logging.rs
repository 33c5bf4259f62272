//! Logging setup for the travel runtime
//!
//! Structured logging through `tracing`; `RUST_LOG` wins over the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (e.g., "info", "debug", "trace")
    pub level: String,
    /// Whether to use JSON format (vs. human-readable)
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            level: config.level.clone(),
            json: config.json,
        }
    }
}

/// Initialize logging for the application
///
/// Should be called once at startup. Logs go to stderr so that tool output
/// printed on stdout stays machine-readable.
///
/// # Example
///
/// ```
/// use travel_core::logging::{init_logging, LogConfig};
///
/// init_logging(LogConfig {
///     level: "debug".to_string(),
///     json: false,
/// });
/// ```
pub fn init_logging(config: LogConfig) {
    let env_filter = env_filter(&config);

    let result = if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    match result {
        Ok(()) => tracing::debug!("Logging initialized at level: {}", config.level),
        Err(_) => tracing::debug!("Logging already initialized"),
    }
}

/// Run `f` with a default-level subscriber scoped to the current thread
///
/// Covers startup work that logs before the configured level is known,
/// such as loading the configuration file itself.
pub fn with_startup_logging<T>(json: bool, f: impl FnOnce() -> T) -> T {
    let config = LogConfig {
        json,
        ..LogConfig::default()
    };
    let env_filter = env_filter(&config);

    if config.json {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr));
        tracing::subscriber::with_default(subscriber, f)
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr));
        tracing::subscriber::with_default(subscriber, f)
    }
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}
