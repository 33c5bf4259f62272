//! Error types shared across the travel workspace
//!
//! Covers the failures that can happen before any tool runs, which all come
//! from loading configuration.

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, TravelError>;

/// Main error type for the travel runtime
#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration parsing errors
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] config::ConfigError),
}

impl TravelError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = TravelError::config("missing providers section");
        assert!(matches!(err, TravelError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: missing providers section"
        );
    }

    #[test]
    fn test_error_from_config_crate() {
        let err = TravelError::from(config::ConfigError::Message("bad level".to_string()));
        assert!(matches!(err, TravelError::ConfigParse(_)));
        assert!(err.to_string().contains("bad level"));
    }
}
