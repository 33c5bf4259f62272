//! Errors from outbound provider calls

/// Result type for provider calls
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Failures talking to, or interpreting, an external provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status without a structured error body
    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider reported an error in its payload
    #[error("{0}")]
    Api(String),

    /// Payload shape cannot be normalized
    #[error("Malformed provider response: {0}")]
    Malformed(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// Create an API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        Self::Api(msg.into())
    }

    /// Create a malformed-payload error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::Malformed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_verbatim() {
        let err = ProviderError::api("Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key");
        assert!(err.to_string().starts_with("Invalid API key."));
    }

    #[test]
    fn test_status_error_display() {
        let err = ProviderError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Provider returned status 502: Bad Gateway");
    }
}
