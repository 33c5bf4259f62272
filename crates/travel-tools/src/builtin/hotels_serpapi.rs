//! Hotel search through SerpApi's Google Hotels engine

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use travel_core::{Credentials, ProviderConfig};

use super::hotels::{hotel_search_schema, Hotel, HotelSearch, HotelSearchMetadata, HotelSearchResult};
use crate::normalize::{normalize_items, Node};
use crate::policy::serpapi_hotels_sort;
use crate::providers::{error_message, serpapi, ProviderError, ProviderResult, SerpApiClient, SerpApiParams};
use crate::request::HotelSearchRequest;
use crate::tool::parse_params;
use crate::{Result, Tool, ToolSchema};

const SOURCE: &str = "SerpApi Google Hotels";
const DEFAULT_BOOKING_URL: &str = "https://www.google.com/travel/hotels";

/// Google Hotels query parameters for `request`
pub fn google_hotels_params(request: &HotelSearchRequest) -> SerpApiParams {
    let mut params = SerpApiParams::new();
    params.insert("engine".into(), "google_hotels".into());
    params.insert("q".into(), request.destination.clone());
    params.insert("check_in_date".into(), request.checkin_date.clone());
    params.insert("check_out_date".into(), request.checkout_date.clone());
    params.insert("adults".into(), request.travelers.to_string());
    params.insert("currency".into(), "USD".into());
    params.insert("gl".into(), "us".into());
    params.insert("hl".into(), "en".into());

    if let Some(sort) = serpapi_hotels_sort(request.preference()) {
        params.insert("sort_by".into(), sort.into());
    }
    params
}

/// `search_hotels_serpapi` tool
pub struct SerpApiHotelSearchTool {
    api_key: Option<String>,
    client: Option<Arc<dyn SerpApiClient>>,
}

impl SerpApiHotelSearchTool {
    /// Create the tool with an explicit key and client
    pub fn new(api_key: Option<String>, client: Option<Arc<dyn SerpApiClient>>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            client,
        }
    }

    /// Create the tool from configuration and environment credentials
    pub fn from_config(providers: &ProviderConfig, credentials: &Credentials) -> Self {
        Self::new(credentials.serpapi_key.clone(), serpapi::client(&providers.serpapi_url))
    }

    /// Run one hotel search
    pub async fn search(&self, request: &HotelSearchRequest) -> HotelSearchResult {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("SERPAPI_KEY not found in environment variables");
            return HotelSearchResult::error("SERPAPI_KEY not found.");
        };
        let Some(client) = self.client.as_ref() else {
            tracing::warn!("SerpApi client is not available");
            return HotelSearchResult::error("SerpApi client not available in this build.");
        };

        tracing::info!(
            "Searching hotels in {} from {} to {}",
            request.destination,
            request.checkin_date,
            request.checkout_date
        );

        let params = google_hotels_params(request);
        match fetch_hotels(client.as_ref(), api_key, &params).await {
            Ok(hotels) => HotelSearchResult::Success(HotelSearch::new(
                SOURCE,
                hotels,
                HotelSearchMetadata::from_request(request),
            )),
            Err(e) => {
                tracing::error!("Hotel search failed: {}", e);
                HotelSearchResult::error(e.to_string())
            }
        }
    }
}

async fn fetch_hotels(client: &dyn SerpApiClient, api_key: &str, params: &SerpApiParams) -> ProviderResult<Vec<Hotel>> {
    let payload = client.search(api_key, params).await?;
    if let Some(message) = error_message(&payload) {
        return Err(ProviderError::Api(message));
    }

    let properties = Node::new(&payload).get("properties").list("properties")?;
    normalize_items(properties, "property", |item| Some(google_hotel(item)))
}

fn google_hotel(item: Node<'_>) -> Hotel {
    Hotel {
        name: item.get("name").str_or("Unknown Hotel"),
        price_per_night: item.path(&["rate_per_night", "lowest"]).value_or("N/A"),
        rating: item.get("overall_rating").value_or("N/A"),
        location: item.first_str_or(&["address", "description"], "Unknown Location"),
        amenities: item.get("amenities").string_list(),
        booking_url: item.get("link").str_or(DEFAULT_BOOKING_URL),
    }
}

#[async_trait]
impl Tool for SerpApiHotelSearchTool {
    fn name(&self) -> &str {
        "search_hotels_serpapi"
    }

    fn description(&self) -> &str {
        "Search Google Hotels for a destination and stay dates using SerpApi"
    }

    fn parameters_schema(&self) -> ToolSchema {
        hotel_search_schema("Parameters for a Google Hotels search")
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let request: HotelSearchRequest = parse_params(params)?;
        request.validate()?;

        let result = self.search(&request).await;
        Ok(serde_json::to_value(result)?)
    }
}
