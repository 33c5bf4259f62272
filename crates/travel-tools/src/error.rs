//! Error types for tool operations
//!
//! These are framework-level failures (unknown tool, bad arguments). Provider
//! failures never surface here; adapters fold them into their result records.

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Errors that can occur during tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Tool already registered
    #[error("Tool already registered: {0}")]
    AlreadyRegistered(String),
}

impl ToolError {
    /// Create an invalid parameters error
    pub fn invalid_params<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameters(msg.into())
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(tool_name: S) -> Self {
        Self::NotFound(tool_name.into())
    }
}
