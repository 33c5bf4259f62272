//! Apify platform client (actor runs)

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use super::ProviderResult;

/// Runs Apify actors
#[async_trait]
pub trait ApifyClient: Send + Sync {
    /// Run `actor_id` with `input`, wait for it to finish and return the
    /// items of its default dataset
    async fn run_actor(&self, token: &str, actor_id: &str, input: &Value) -> ProviderResult<Value>;
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(feature = "apify")]
pub fn client(base_url: &str) -> Option<Arc<dyn ApifyClient>> {
    match http::HttpApify::new(base_url) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!("Apify client could not be created: {}", e);
            None
        }
    }
}

/// Build the HTTP client, or `None` if it is unavailable in this build
#[cfg(not(feature = "apify"))]
pub fn client(base_url: &str) -> Option<Arc<dyn ApifyClient>> {
    tracing::debug!("Apify support not compiled in (base url {})", base_url);
    None
}

#[cfg(feature = "apify")]
pub use http::HttpApify;

#[cfg(feature = "apify")]
mod http {
    use super::*;
    use crate::providers::{http_client, read_json};

    /// Apify over HTTPS, using the synchronous run endpoint
    pub struct HttpApify {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpApify {
        /// Create a client for the given API root (e.g. `https://api.apify.com/v2`)
        pub fn new(base_url: impl Into<String>) -> ProviderResult<Self> {
            Ok(Self {
                client: http_client()?,
                base_url: base_url.into().trim_end_matches('/').to_string(),
            })
        }

        // Actor ids are `user/name` but the URL form is `user~name`.
        pub(super) fn run_url(&self, actor_id: &str) -> String {
            format!(
                "{}/acts/{}/run-sync-get-dataset-items",
                self.base_url,
                actor_id.replace('/', "~")
            )
        }
    }

    #[async_trait]
    impl ApifyClient for HttpApify {
        async fn run_actor(&self, token: &str, actor_id: &str, input: &Value) -> ProviderResult<Value> {
            let response = self
                .client
                .post(self.run_url(actor_id))
                .query(&[("token", token), ("format", "json"), ("clean", "true")])
                .json(input)
                .send()
                .await?;

            read_json(response).await
        }
    }

}
