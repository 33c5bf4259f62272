//! Tool System Demo
//!
//! Runs the travel tools offline: the planners directly, and a hotel search
//! against a scripted provider.
//!
//! Run with:
//! ```bash
//! cargo run -p travel-tools --example tool_demo
//! ```

use serde_json::json;
use std::sync::Arc;
use travel_tools::builtin::*;
use travel_tools::providers::mock::MockProvider;
use travel_tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Travel Tools Demo\n");

    let hotels = Arc::new(MockProvider::respond(json!([
        {"name": "Hotel Gracery Shinjuku", "price": 180, "rating": 8.6, "address": "Kabukicho, Tokyo"},
        {"name": "Park Hyatt Tokyo", "price": 920, "rating": 9.3},
        {"price": 75}
    ])));

    let registry = ToolRegistry::new();
    registry.register(ApifyHotelSearchTool::new(Some("demo-token".to_string()), Some(hotels.clone())))?;
    registry.register(ItineraryTool)?;
    registry.register(BudgetTool)?;

    println!("=== Registered Tools ===");
    for tool_name in registry.list_tools() {
        if let Some(tool) = registry.get_tool(&tool_name) {
            println!("  - {}: {}", tool.name(), tool.description());
        }
    }
    println!("Total tools: {}\n", registry.count());

    println!("=== Hotel search ===");
    let result = registry
        .execute(
            "search_hotels_apify",
            json!({
                "destination": "Tokyo",
                "checkin_date": "2026-03-15",
                "checkout_date": "2026-03-20",
                "budget_preference": "budget"
            }),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    println!("Provider calls: {}\n", hotels.call_count());

    println!("=== Budget ===");
    let budget = registry
        .execute(
            "calculate_budget",
            json!({"destination": "Tokyo", "duration": 5, "travelers": 2, "style": "budget"}),
        )
        .await?;
    println!("{}\n", serde_json::to_string_pretty(&budget["totals"])?);

    println!("=== Itinerary ===");
    let itinerary = registry
        .execute(
            "create_itinerary",
            json!({"destination": "Tokyo", "duration": 3, "budget": "luxury", "travelers": 2}),
        )
        .await?;
    println!("{}", serde_json::to_string_pretty(&itinerary["days"])?);

    println!("\n=== Unknown tool ===");
    if let Err(e) = registry.execute("search_trains", json!({})).await {
        println!("Error: {}", e);
    }

    Ok(())
}
