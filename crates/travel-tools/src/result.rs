//! Result records returned by the search tools
//!
//! Hard-failure adapters return [`SearchResult`], tagged by `status`.
//! The destination research tool has its own always-successful record
//! (see [`crate::builtin::research::DestinationOverview`]); the two are kept
//! apart because callers depend on the difference.

use serde::{Deserialize, Serialize};

/// Outcome of a hard-failure search adapter
///
/// Serializes as `{"status": "success", ...payload}` or
/// `{"status": "error", "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResult<T> {
    /// Provider call and normalization succeeded
    Success(T),

    /// A precondition or the provider call failed
    Error {
        /// Human-readable failure description
        message: String,
    },
}

impl<T> SearchResult<T> {
    /// Create an error result
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Whether this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Success payload, if any
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error { .. } => None,
        }
    }

    /// Error message, if any
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message } => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Payload {
        source: String,
        items: Vec<u32>,
    }

    #[test]
    fn test_success_serializes_flat_with_status() {
        let result = SearchResult::Success(Payload {
            source: "Test".to_string(),
            items: vec![1, 2],
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["source"], "Test");
        assert_eq!(json["items"][1], 2);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_error_serializes_message_only() {
        let result: SearchResult<Payload> = SearchResult::error("SERPAPI_KEY not found.");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": "error", "message": "SERPAPI_KEY not found."})
        );
        assert_eq!(result.error_message(), Some("SERPAPI_KEY not found."));
        assert!(!result.is_success());
    }

    #[test]
    fn test_deserialize_tagged() {
        let json = serde_json::json!({"status": "success", "source": "X", "items": []});
        let result: SearchResult<Payload> = serde_json::from_value(json).unwrap();
        assert_eq!(result.success().unwrap().source, "X");
    }
}
