//! Error types for the agent runner and its messaging layer

use travel_tools::ToolError;

/// Result type for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors raised while handling channel traffic
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Message delivery failed
    #[error("Message delivery failed: {0}")]
    DeliveryFailed(String),

    /// Command arguments were not valid JSON
    #[error("Invalid command arguments: {0}")]
    InvalidCommand(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Tool lookup or argument failure
    #[error(transparent)]
    Tool(#[from] ToolError),
}

impl AgentError {
    /// Create a delivery failed error
    pub fn delivery_failed<S: Into<String>>(msg: S) -> Self {
        Self::DeliveryFailed(msg.into())
    }

    /// Create an invalid command error
    pub fn invalid_command<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCommand(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_is_transparent() {
        let err: AgentError = ToolError::not_found("search_trains").into();
        assert_eq!(err.to_string(), "Tool not found: search_trains");
    }
}
