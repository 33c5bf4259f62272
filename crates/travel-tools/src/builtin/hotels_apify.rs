//! Hotel search through the Apify Booking.com scraper actor

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use travel_core::{Credentials, ProviderConfig};

use super::hotels::{hotel_search_schema, Hotel, HotelSearch, HotelSearchMetadata, HotelSearchResult};
use crate::normalize::{normalize_items, Node};
use crate::policy::apify_booking_sort;
use crate::providers::{apify, ApifyClient, ProviderResult};
use crate::request::HotelSearchRequest;
use crate::tool::parse_params;
use crate::{Result, Tool, ToolSchema};

/// Apify actor that scrapes Booking.com search results
pub const BOOKING_SCRAPER_ACTOR: &str = "voyager/booking-scraper";

const SOURCE: &str = "Apify Booking.com Scraper";
const DEFAULT_BOOKING_URL: &str = "https://booking.com";

/// Actor input in the scraper's own field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingScraperInput {
    pub search: String,
    pub check_in: String,
    pub check_out: String,
    pub rooms: u32,
    pub adults: u32,
    pub children: u32,
    pub currency: String,
    pub language: String,
    pub sort_by: String,
    pub max_pages: u32,
}

/// Everything needed for one actor run
#[derive(Debug, Clone, PartialEq)]
pub struct BookingScraperRequest {
    pub actor_id: String,
    pub input: BookingScraperInput,
    pub metadata: HotelSearchMetadata,
}

impl BookingScraperRequest {
    /// Map caller arguments onto the scraper's input
    pub fn build(request: &HotelSearchRequest) -> Self {
        Self {
            actor_id: BOOKING_SCRAPER_ACTOR.to_string(),
            input: BookingScraperInput {
                search: request.destination.clone(),
                check_in: request.checkin_date.clone(),
                check_out: request.checkout_date.clone(),
                // two guests per room
                rooms: request.travelers.div_ceil(2),
                adults: request.travelers,
                children: 0,
                currency: "USD".to_string(),
                language: "en-gb".to_string(),
                sort_by: apify_booking_sort(request.preference()).to_string(),
                max_pages: 1,
            },
            metadata: HotelSearchMetadata::from_request(request),
        }
    }
}

/// `search_hotels_apify` tool
pub struct ApifyHotelSearchTool {
    token: Option<String>,
    client: Option<Arc<dyn ApifyClient>>,
}

impl ApifyHotelSearchTool {
    /// Create the tool with an explicit token and client
    pub fn new(token: Option<String>, client: Option<Arc<dyn ApifyClient>>) -> Self {
        Self {
            token: token.filter(|token| !token.is_empty()),
            client,
        }
    }

    /// Create the tool from configuration and environment credentials
    pub fn from_config(providers: &ProviderConfig, credentials: &Credentials) -> Self {
        Self::new(credentials.apify_token.clone(), apify::client(&providers.apify_url))
    }

    /// Run one hotel search
    pub async fn search(&self, request: &HotelSearchRequest) -> HotelSearchResult {
        let Some(token) = self.token.as_deref() else {
            tracing::warn!("APIFY_TOKEN not found in environment variables");
            return HotelSearchResult::error("APIFY_TOKEN not provided. Cannot fetch real hotel data.");
        };
        let Some(client) = self.client.as_ref() else {
            tracing::warn!("Apify client is not available");
            return HotelSearchResult::error("Apify client not available in this build.");
        };

        let scraper_request = BookingScraperRequest::build(request);
        tracing::info!(
            "Hotel search for {} via {} (sort {})",
            request.destination,
            scraper_request.actor_id,
            scraper_request.input.sort_by
        );

        match fetch_hotels(client.as_ref(), token, &scraper_request).await {
            Ok(hotels) => {
                tracing::info!("Apify returned {} hotels for {}", hotels.len(), request.destination);
                HotelSearchResult::Success(HotelSearch::new(SOURCE, hotels, scraper_request.metadata))
            }
            Err(e) => {
                tracing::error!("Apify execution failed: {}", e);
                HotelSearchResult::error(format!("Failed to fetch hotel data: {}", e))
            }
        }
    }
}

async fn fetch_hotels(
    client: &dyn ApifyClient,
    token: &str,
    request: &BookingScraperRequest,
) -> ProviderResult<Vec<Hotel>> {
    let input = serde_json::to_value(&request.input)?;
    let items = client.run_actor(token, &request.actor_id, &input).await?;

    normalize_items(Node::new(&items).list("dataset items")?, "hotel", |item| {
        Some(booking_hotel(item))
    })
}

fn booking_hotel(item: Node<'_>) -> Hotel {
    // `address` is a plain string in older scraper versions, an object later
    let address = item.get("address");
    let location = match address.value() {
        Some(Value::Object(_)) => address.get("full").str_or("Unknown Location"),
        _ => address.str_or("Unknown Location"),
    };

    Hotel {
        name: item.get("name").str_or("Unknown Hotel"),
        price_per_night: item.get("price").value_or("N/A"),
        rating: item.get("rating").value_or("N/A"),
        location,
        amenities: Vec::new(),
        booking_url: item.get("url").str_or(DEFAULT_BOOKING_URL),
    }
}

#[async_trait]
impl Tool for ApifyHotelSearchTool {
    fn name(&self) -> &str {
        "search_hotels_apify"
    }

    fn description(&self) -> &str {
        "Search Booking.com hotels for a destination and stay dates using the Apify scraper"
    }

    fn parameters_schema(&self) -> ToolSchema {
        hotel_search_schema("Parameters for a Booking.com hotel search")
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let request: HotelSearchRequest = parse_params(params)?;
        request.validate()?;

        let result = self.search(&request).await;
        Ok(serde_json::to_value(result)?)
    }
}
