//! Wikivoyage MediaWiki API client

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::ProviderResult;

/// A MediaWiki `api.php` endpoint
#[async_trait]
pub trait WikivoyageClient: Send + Sync {
    /// Issue one `GET` query; `format=json` is added by the client
    async fn query(&self, params: &[(&str, String)]) -> ProviderResult<Value>;
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(feature = "wikivoyage")]
pub fn client(base_url: &str) -> Option<Arc<dyn WikivoyageClient>> {
    match http::HttpWikivoyage::new(base_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("Wikivoyage client could not be created: {}", e);
            None
        }
    }
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(not(feature = "wikivoyage"))]
pub fn client(base_url: &str) -> Option<Arc<dyn WikivoyageClient>> {
    tracing::debug!("Wikivoyage support not compiled in (base url {})", base_url);
    None
}

#[cfg(feature = "wikivoyage")]
pub use http::HttpWikivoyage;

#[cfg(feature = "wikivoyage")]
mod http {
    use super::*;
    use crate::providers::{http_client, read_json, ProviderError};

    /// Wikivoyage over HTTPS
    pub struct HttpWikivoyage {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpWikivoyage {
        /// Create a client for the given `api.php` URL
        pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
            Ok(Self {
                client: http_client()?,
                base_url: base_url.into(),
            })
        }
    }

    #[async_trait]
    impl WikivoyageClient for HttpWikivoyage {
        async fn query(&self, params: &[(&str, String)]) -> ProviderResult<Value> {
            let response = self
                .client
                .get(&self.base_url)
                .query(params)
                .query(&[("format", "json")])
                .send()
                .await?;

            let body = read_json(response).await?;

            // MediaWiki reports errors with a 200 status.
            match crate::providers::error_message(&body) {
                Some(message) => Err(ProviderError::Api(message)),
                None => Ok(body),
            }
        }
    }
}
