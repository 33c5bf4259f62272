//! Flight search through SerpApi's Google Flights engine

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use travel_core::{Credentials, ProviderConfig};

use crate::normalize::{normalize_items, Node};
use crate::policy::serpapi_flights_sort;
use crate::providers::{error_message, serpapi, ProviderError, ProviderResult, SerpApiClient, SerpApiParams};
use crate::request::FlightSearchRequest;
use crate::result::SearchResult;
use crate::schema::{budget_preference_property, property, property_with_default};
use crate::tool::parse_params;
use crate::{Result, Tool, ToolSchema};

const SOURCE: &str = "SerpApi Google Flights";
const DEFAULT_FLIGHTS_URL: &str = "https://www.google.com/travel/flights";

/// Result of the flight search tool
pub type FlightSearchResult = SearchResult<FlightSearch>;

/// One normalized itinerary option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    /// Carrier of the first leg
    pub airline: String,
    pub flight_number: String,
    /// Passed through as the provider sent it
    pub price_total: Value,
    /// Total minutes, passed through as the provider sent it
    pub duration_mins: Value,
    pub depart_time: String,
    pub arrive_time: String,
    pub stops: usize,
    pub booking_link: String,
    pub source: String,
}

/// Request parameters echoed back with the results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSearchMetadata {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub travelers: u32,
    pub budget_preference: String,
    pub count: usize,
}

/// Successful flight search payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSearch {
    pub source: String,
    pub options: Vec<FlightOption>,
    pub metadata: FlightSearchMetadata,
}

/// Google Flights query parameters for `request`
pub fn google_flights_params(request: &FlightSearchRequest) -> SerpApiParams {
    let mut params = SerpApiParams::new();
    params.insert("engine".into(), "google_flights".into());
    params.insert("departure_id".into(), request.origin.clone());
    params.insert("arrival_id".into(), request.destination.clone());
    params.insert("outbound_date".into(), request.departure_date.clone());
    params.insert("adults".into(), request.travelers.to_string());
    params.insert("currency".into(), "USD".into());
    params.insert("hl".into(), "en".into());

    if let Some(return_date) = &request.return_date {
        params.insert("return_date".into(), return_date.clone());
    }
    if let Some(sort) = serpapi_flights_sort(request.preference()) {
        params.insert("sort_by".into(), sort.into());
    }
    params
}

/// `search_flights_serpapi` tool
pub struct FlightSearchTool {
    api_key: Option<String>,
    client: Option<Arc<dyn SerpApiClient>>,
}

impl FlightSearchTool {
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

    /// Run one flight search
    pub async fn search(&self, request: &FlightSearchRequest) -> FlightSearchResult {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("SERPAPI_KEY not found in environment variables");
            return FlightSearchResult::error("SERPAPI_KEY not found.");
        };
        let Some(client) = self.client.as_ref() else {
            tracing::warn!("SerpApi client is not available");
            return FlightSearchResult::error("SerpApi client not available in this build.");
        };

        tracing::info!(
            "Searching flights {} -> {} on {}",
            request.origin,
            request.destination,
            request.departure_date
        );

        let params = google_flights_params(request);
        match fetch_options(client.as_ref(), api_key, &params).await {
            Ok(options) => FlightSearchResult::Success(FlightSearch {
                source: SOURCE.to_string(),
                metadata: FlightSearchMetadata {
                    origin: request.origin.clone(),
                    destination: request.destination.clone(),
                    departure_date: request.departure_date.clone(),
                    return_date: request.return_date.clone(),
                    travelers: request.travelers,
                    budget_preference: request.budget_preference.clone(),
                    count: options.len(),
                },
                options,
            }),
            Err(e) => {
                tracing::error!("Flight search failed: {}", e);
                FlightSearchResult::error(e.to_string())
            }
        }
    }
}

async fn fetch_options(
    client: &dyn SerpApiClient,
    api_key: &str,
    params: &SerpApiParams,
) -> ProviderResult<Vec<FlightOption>> {
    let payload = client.search(api_key, params).await?;
    if let Some(message) = error_message(&payload) {
        return Err(ProviderError::Api(message));
    }

    let root = Node::new(&payload);
    let booking_link = root
        .path(&["search_metadata", "google_flights_url"])
        .str_or(DEFAULT_FLIGHTS_URL);

    let mut entries = root.get("best_flights").list("best_flights")?;
    entries.extend(root.get("other_flights").list("other_flights")?);

    let mut legs_error = None;
    let options = normalize_items(entries, "flight", |entry| {
        match entry.get("flights").list("flights") {
            Ok(legs) => flight_option(entry, &legs, &booking_link),
            Err(e) => {
                legs_error.get_or_insert(e);
                None
            }
        }
    })?;

    match legs_error {
        Some(e) => Err(e),
        None => Ok(options),
    }
}

// Entries without legs are skipped.
fn flight_option(entry: Node<'_>, legs: &[Node<'_>], booking_link: &str) -> Option<FlightOption> {
    let first = legs.first()?;
    let last = legs.last()?;

    Some(FlightOption {
        airline: first.get("airline").str_or("Unknown Airline"),
        flight_number: first.get("flight_number").str_or(""),
        price_total: entry.get("price").value_or("N/A"),
        duration_mins: entry.get("total_duration").value_or(0),
        depart_time: first.path(&["departure_airport", "time"]).str_or(""),
        arrive_time: last.path(&["arrival_airport", "time"]).str_or(""),
        stops: legs.len() - 1,
        booking_link: booking_link.to_string(),
        source: "SerpApi".to_string(),
    })
}

#[async_trait]
impl Tool for FlightSearchTool {
    fn name(&self) -> &str {
        "search_flights_serpapi"
    }

    fn description(&self) -> &str {
        "Search Google Flights between two airports or cities using SerpApi"
    }

    fn parameters_schema(&self) -> ToolSchema {
        ToolSchema::new()
            .with_description("Parameters for a Google Flights search")
            .with_properties(json!({
                "origin": property("string", "Origin airport code or city (e.g. JFK)"),
                "destination": property("string", "Destination airport code or city (e.g. LHR)"),
                "departure_date": property("string", "Outbound date (YYYY-MM-DD)"),
                "return_date": property("string", "Return date (YYYY-MM-DD); omit for one-way"),
                "travelers": property_with_default("integer", "Number of adult passengers", json!(1)),
                "budget_preference": budget_preference_property(),
            }))
            .with_required(&["origin", "destination", "departure_date"])
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let request: FlightSearchRequest = parse_params(params)?;
        request.validate()?;

        let result = self.search(&request).await;
        Ok(serde_json::to_value(result)?)
    }
}
