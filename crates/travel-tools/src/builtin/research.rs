//! Destination research against the Wikivoyage API
//!
//! Unlike the search adapters this tool never reports `status: error`.
//! Failures produce a [`DestinationOverview`] whose `error` field is set and
//! whose overview carries a fixed fallback sentence.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use travel_core::ProviderConfig;

use crate::normalize::Node;
use crate::providers::{wikivoyage, ProviderError, ProviderResult, WikivoyageClient};
use crate::schema::{property, property_with_default};
use crate::tool::parse_params;
use crate::{Result, Tool, ToolSchema};

/// Characters of the page intro kept in the overview
pub const MAX_OVERVIEW_CHARS: usize = 1000;

const SOURCE: &str = "Wikivoyage";
const NOT_FOUND: &str = "Could not find destination on Wikivoyage.";
const NO_OVERVIEW: &str = "No overview available.";
const FAILED: &str = "Failed to fetch destination data";
const FAILED_OVERVIEW: &str = "Research failed due to API error.";

/// Destination research arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub destination: String,
    /// Trip length in days
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default = "default_interests")]
    pub interests: Vec<String>,
}

fn default_duration() -> u32 {
    7
}

fn default_interests() -> Vec<String> {
    ["culture", "food", "sightseeing"].map(String::from).to_vec()
}

impl ResearchRequest {
    /// Research `destination` with the default duration and interests
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            duration: default_duration(),
            interests: default_interests(),
        }
    }
}

/// Research outcome; always well formed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationOverview {
    pub destination: String,
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DestinationOverview {
    fn not_found(request: &ResearchRequest) -> Self {
        Self {
            destination: request.destination.clone(),
            overview: NOT_FOUND.to_string(),
            source: None,
            duration: None,
            interests: Some(request.interests.clone()),
            error: None,
        }
    }

    fn found(request: &ResearchRequest, extract: &str) -> Self {
        Self {
            destination: request.destination.clone(),
            overview: truncate_overview(extract),
            source: Some(SOURCE.to_string()),
            duration: Some(request.duration),
            interests: Some(request.interests.clone()),
            error: None,
        }
    }

    fn failed(request: &ResearchRequest) -> Self {
        Self {
            destination: request.destination.clone(),
            overview: FAILED_OVERVIEW.to_string(),
            source: None,
            duration: None,
            interests: None,
            error: Some(FAILED.to_string()),
        }
    }

    /// Whether the lookup failed
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Keep the first [`MAX_OVERVIEW_CHARS`] characters, marking the cut with `...`
pub fn truncate_overview(extract: &str) -> String {
    match extract.char_indices().nth(MAX_OVERVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &extract[..cut]),
        None => extract.to_string(),
    }
}

/// `research_destination` tool
pub struct DestinationResearchTool {
    client: Option<Arc<dyn WikivoyageClient>>,
}

impl DestinationResearchTool {
    /// Create the tool with an explicit client
    pub fn new(client: Option<Arc<dyn WikivoyageClient>>) -> Self {
        Self { client }
    }

    /// Create the tool from configuration
    pub fn from_config(providers: &ProviderConfig) -> Self {
        Self::new(wikivoyage::client(&providers.wikivoyage_url))
    }

    /// Look up the destination's introduction
    pub async fn research(&self, request: &ResearchRequest) -> DestinationOverview {
        let Some(client) = self.client.as_ref() else {
            tracing::warn!("Wikivoyage client is not available");
            return DestinationOverview::failed(request);
        };

        match lookup(client.as_ref(), &request.destination).await {
            Ok(Some(extract)) => DestinationOverview::found(request, &extract),
            Ok(None) => {
                tracing::info!("No Wikivoyage page for {}", request.destination);
                DestinationOverview::not_found(request)
            }
            Err(e) => {
                tracing::error!("Wikivoyage API error: {}", e);
                DestinationOverview::failed(request)
            }
        }
    }
}

// `Ok(None)` when the search has no hits.
async fn lookup(client: &dyn WikivoyageClient, destination: &str) -> ProviderResult<Option<String>> {
    let search = client
        .query(&[
            ("action", "query".to_string()),
            ("list", "search".to_string()),
            ("srsearch", destination.to_string()),
        ])
        .await?;

    let hits = Node::new(&search).path(&["query", "search"]).list("search")?;
    let Some(hit) = hits.first() else {
        return Ok(None);
    };

    let page_id = hit.get("pageid").str_or("");
    if page_id.is_empty() {
        return Err(ProviderError::malformed("search hit has no pageid"));
    }

    let extracts = client
        .query(&[
            ("action", "query".to_string()),
            ("prop", "extracts".to_string()),
            ("pageids", page_id.clone()),
            ("exintro", "1".to_string()),
            ("explaintext", "1".to_string()),
        ])
        .await?;

    let page = Node::new(&extracts).path(&["query", "pages", page_id.as_str()]);
    if !page.is_present() {
        return Err(ProviderError::malformed(format!("page {} missing from extracts", page_id)));
    }

    Ok(Some(page.get("extract").str_or(NO_OVERVIEW)))
}

#[async_trait]
impl Tool for DestinationResearchTool {
    fn name(&self) -> &str {
        "research_destination"
    }

    fn description(&self) -> &str {
        "Research a travel destination and return an overview from Wikivoyage"
    }

    fn parameters_schema(&self) -> ToolSchema {
        ToolSchema::new()
            .with_description("Parameters for destination research")
            .with_properties(json!({
                "destination": property("string", "Destination name"),
                "duration": property_with_default("integer", "Trip length in days", json!(7)),
                "interests": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Traveler interests",
                    "default": default_interests(),
                },
            }))
            .with_required(&["destination"])
    }

    async fn execute(&self, params: Value) -> Result<Value> {
        let request: ResearchRequest = parse_params(params)?;
        let overview = self.research(&request).await;
        Ok(serde_json::to_value(overview)?)
    }
}
