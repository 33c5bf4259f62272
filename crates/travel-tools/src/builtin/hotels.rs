//! Hotel records shared by both hotel search tools

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::request::HotelSearchRequest;
use crate::result::SearchResult;
use crate::schema::{budget_preference_property, property, property_with_default};
use crate::ToolSchema;

/// Result of a hotel search tool
pub type HotelSearchResult = SearchResult<HotelSearch>;

/// One normalized hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    /// Passed through as the provider sent it (string or number)
    pub price_per_night: Value,
    /// Passed through as the provider sent it (string or number)
    pub rating: Value,
    pub location: String,
    pub amenities: Vec<String>,
    pub booking_url: String,
}

/// Request parameters echoed back with the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSearchMetadata {
    pub destination: String,
    pub checkin_date: String,
    pub checkout_date: String,
    pub nights: i64,
    pub travelers: u32,
    pub budget_preference: String,
    /// Number of hotels returned
    pub count: usize,
}

impl HotelSearchMetadata {
    /// Metadata for `request` before any results are known
    pub fn from_request(request: &HotelSearchRequest) -> Self {
        Self {
            destination: request.destination.clone(),
            checkin_date: request.checkin_date.clone(),
            checkout_date: request.checkout_date.clone(),
            nights: request.nights(),
            travelers: request.travelers,
            budget_preference: request.budget_preference.clone(),
            count: 0,
        }
    }
}

/// Successful hotel search payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSearch {
    pub source: String,
    pub hotels: Vec<Hotel>,
    pub metadata: HotelSearchMetadata,
}

impl HotelSearch {
    /// Assemble a payload, filling in the result count
    pub fn new(source: &str, hotels: Vec<Hotel>, mut metadata: HotelSearchMetadata) -> Self {
        metadata.count = hotels.len();
        Self {
            source: source.to_string(),
            hotels,
            metadata,
        }
    }
}

/// Parameter schema common to both hotel tools
pub(crate) fn hotel_search_schema(description: &str) -> ToolSchema {
    ToolSchema::new()
        .with_description(description)
        .with_properties(json!({
            "destination": property("string", "City or area to search"),
            "checkin_date": property("string", "Check-in date (YYYY-MM-DD)"),
            "checkout_date": property("string", "Check-out date (YYYY-MM-DD)"),
            "travelers": property_with_default("integer", "Number of guests", json!(2)),
            "budget_preference": budget_preference_property(),
        }))
        .with_required(&["destination", "checkin_date", "checkout_date"])
}
