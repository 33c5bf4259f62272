//! Travel Core
//!
//! Shared plumbing for the travel search tools: error handling,
//! configuration, provider credentials and logging setup.

pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, ProviderConfig, TravelConfig};
pub use credentials::Credentials;
pub use error::{Result, TravelError};
pub use logging::init_logging;
