//! SerpApi client (Google Hotels and Google Flights engines)

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::ProviderResult;

/// Query parameters for one SerpApi search, excluding the API key
pub type SerpApiParams = BTreeMap<String, String>;

/// A SerpApi search endpoint
#[async_trait]
pub trait SerpApiClient: Send + Sync {
    /// Run one search and return the raw JSON payload
    async fn search(&self, api_key: &str, params: &SerpApiParams) -> ProviderResult<Value>;
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(feature = "serpapi")]
pub fn client(base_url: &str) -> Option<Arc<dyn SerpApiClient>> {
    match http::HttpSerpApi::new(base_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("SerpApi client could not be created: {}", e);
            None
        }
    }
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(not(feature = "serpapi"))]
pub fn client(base_url: &str) -> Option<Arc<dyn SerpApiClient>> {
    tracing::debug!("SerpApi support not compiled in (base url {})", base_url);
    None
}

#[cfg(feature = "serpapi")]
pub use http::HttpSerpApi;

#[cfg(feature = "serpapi")]
mod http {
    use super::*;
    use crate::providers::{http_client, read_json};

    /// SerpApi over HTTPS
    pub struct HttpSerpApi {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpSerpApi {
        /// Create a client for the given `search.json` endpoint
        pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
            Ok(Self {
                client: http_client()?,
                base_url: base_url.into(),
            })
        }
    }

    #[async_trait]
    impl SerpApiClient for HttpSerpApi {
        async fn search(&self, api_key: &str, params: &SerpApiParams) -> ProviderResult<Value> {
            let response = self
                .client
                .get(&self.base_url)
                .query(params)
                .query(&[("api_key", api_key)])
                .send()
                .await?;

            read_json(response).await
        }
    }

}
