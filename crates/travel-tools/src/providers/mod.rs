//! Outbound provider clients
//!
//! Each provider is reached through a small async trait so adapters can be
//! exercised against [`mock::MockProvider`]. The HTTP implementations are
//! compiled behind cargo features; a disabled feature (or a client that fails
//! to build) leaves the adapter with no client, which it reports as an
//! unavailable dependency instead of attempting a call.

pub mod apify;
pub mod error;
pub mod mock;
pub mod serpapi;
pub mod wikivoyage;

use serde_json::Value;

use crate::normalize::Node;

pub use apify::ApifyClient;
pub use error::{ProviderError, ProviderResult};
pub use serpapi::{SerpApiClient, SerpApiParams};
pub use wikivoyage::WikivoyageClient;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("travel-tools/", env!("CARGO_PKG_VERSION"));

/// Extract a provider-reported error message from a JSON body
///
/// Understands `{"error": "..."}` (SerpApi), `{"error": {"message": "..."}}`
/// (Apify) and `{"error": {"info": "..."}}` (MediaWiki).
pub fn error_message(body: &Value) -> Option<String> {
    let error = Node::new(body).get("error");
    if !error.is_present() {
        return None;
    }

    match error.value() {
        Some(Value::String(message)) => Some(message.clone()),
        _ => {
            let message = error.first_str_or(&["message", "info"], "");
            Some(if message.is_empty() {
                error.value_or(Value::Null).to_string()
            } else {
                message
            })
        }
    }
}

#[cfg(any(feature = "serpapi", feature = "apify", feature = "wikivoyage"))]
pub(crate) fn http_client() -> ProviderResult<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// Read a provider response as JSON, turning failures into [`ProviderError`]
#[cfg(any(feature = "serpapi", feature = "apify", feature = "wikivoyage"))]
pub(crate) async fn read_json(response: reqwest::Response) -> ProviderResult<Value> {
    let status = response.status();
    let text = response.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(body) if status.is_success() => Ok(body),
        Ok(body) => Err(match error_message(&body) {
            Some(message) => ProviderError::Api(message),
            None => ProviderError::Status {
                status: status.as_u16(),
                body: text,
            },
        }),
        Err(e) if status.is_success() => {
            Err(ProviderError::malformed(format!("invalid JSON: {}", e)))
        }
        Err(_) => Err(ProviderError::Status {
            status: status.as_u16(),
            body: text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_string() {
        let body = json!({"error": "Google hasn't returned any results for this query."});
        assert_eq!(
            error_message(&body).as_deref(),
            Some("Google hasn't returned any results for this query.")
        );
    }

    #[test]
    fn test_error_message_object() {
        let body = json!({"error": {"type": "record-not-found", "message": "Actor was not found"}});
        assert_eq!(error_message(&body).as_deref(), Some("Actor was not found"));

        let body = json!({"error": {"code": "badvalue", "info": "Unrecognized value"}});
        assert_eq!(error_message(&body).as_deref(), Some("Unrecognized value"));
    }

    #[test]
    fn test_error_message_absent() {
        assert!(error_message(&json!({"properties": []})).is_none());
        assert!(error_message(&json!({"error": null})).is_none());
    }
}
