//! Travel Search Tools
//!
//! Thin tools that call third-party search APIs (flights, hotels, destination
//! research) and reshape their JSON into fixed-shape records for a chat agent.
//!
//! Every search adapter runs the same pipeline: check its credential, check
//! that its provider client exists, build the provider request, make exactly
//! one call, then normalize the payload. Failures after the preconditions are
//! folded into a `{"status": "error", "message": ...}` record.
//!
//! # Example
//!
//! ```no_run
//! use travel_core::{Credentials, ProviderConfig};
//! use travel_tools::{register_travel_tools, ToolRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ToolRegistry::new();
//!     register_travel_tools(&registry, &ProviderConfig::default(), &Credentials::from_env())?;
//!
//!     let result = registry
//!         .execute("research_destination", json!({"destination": "Kyoto"}))
//!         .await?;
//!     println!("{}", result);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod normalize;
pub mod policy;
pub mod providers;
pub mod registry;
pub mod request;
pub mod result;
pub mod schema;
pub mod tool;

// Built-in tools
pub mod builtin;

use travel_core::{Credentials, ProviderConfig};

// Re-exports
pub use error::{Result, ToolError};
pub use normalize::MAX_RESULTS;
pub use policy::BudgetPreference;
pub use registry::ToolRegistry;
pub use request::{FlightSearchRequest, HotelSearchRequest};
pub use result::SearchResult;
pub use schema::ToolSchema;
pub use tool::Tool;

/// Register every travel tool, wiring clients from `providers` and keys from `credentials`
pub fn register_travel_tools(
    registry: &ToolRegistry,
    providers: &ProviderConfig,
    credentials: &Credentials,
) -> Result<()> {
    registry.register(builtin::FlightSearchTool::from_config(providers, credentials))?;
    registry.register(builtin::ApifyHotelSearchTool::from_config(providers, credentials))?;
    registry.register(builtin::SerpApiHotelSearchTool::from_config(providers, credentials))?;
    registry.register(builtin::DestinationResearchTool::from_config(providers))?;
    registry.register(builtin::ItineraryTool)?;
    registry.register(builtin::BudgetTool)?;

    tracing::info!("Registered {} travel tools", registry.count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_travel_tools() {
        let registry = ToolRegistry::new();
        register_travel_tools(&registry, &ProviderConfig::default(), &Credentials::none()).unwrap();

        assert_eq!(
            registry.list_tools(),
            vec![
                "calculate_budget",
                "create_itinerary",
                "research_destination",
                "search_flights_serpapi",
                "search_hotels_apify",
                "search_hotels_serpapi",
            ]
        );
    }

    #[test]
    fn test_register_twice_fails() {
        let registry = ToolRegistry::new();
        let providers = ProviderConfig::default();
        register_travel_tools(&registry, &providers, &Credentials::none()).unwrap();

        let result = register_travel_tools(&registry, &providers, &Credentials::none());
        assert!(matches!(result, Err(ToolError::AlreadyRegistered(_))));
    }
}
