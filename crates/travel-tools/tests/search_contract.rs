//! Result contract tests for the search tools, driven through the registry
//! with scripted providers.

use serde_json::{json, Value};
use std::sync::Arc;

use travel_tools::builtin::{
    ApifyHotelSearchTool, DestinationResearchTool, FlightSearchTool, SerpApiHotelSearchTool,
};
use travel_tools::providers::mock::MockProvider;
use travel_tools::{ToolError, ToolRegistry, MAX_RESULTS};

fn tokyo_args() -> Value {
    json!({
        "destination": "Tokyo",
        "checkin_date": "2026-03-15",
        "checkout_date": "2026-03-20",
        "travelers": 2,
        "budget_preference": "mid-range"
    })
}

fn apify_registry(token: Option<&str>, mock: &Arc<MockProvider>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry
        .register(ApifyHotelSearchTool::new(token.map(String::from), Some(mock.clone())))
        .unwrap();
    registry
}

fn serpapi_registry(key: Option<&str>, mock: &Arc<MockProvider>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry
        .register(SerpApiHotelSearchTool::new(key.map(String::from), Some(mock.clone())))
        .unwrap();
    registry
        .register(FlightSearchTool::new(key.map(String::from), Some(mock.clone())))
        .unwrap();
    registry
}

/// Every declared hotel field is present and non-null
fn assert_hotel_fully_formed(hotel: &Value) {
    for field in ["name", "price_per_night", "rating", "location", "amenities", "booking_url"] {
        assert!(
            hotel.get(field).is_some_and(|value| !value.is_null()),
            "hotel field {} missing in {}",
            field,
            hotel
        );
    }
}

#[tokio::test]
async fn test_tokyo_three_hotels() {
    let mock = Arc::new(MockProvider::respond(json!([
        {"name": "Hotel Gracery Shinjuku", "price": 180, "rating": 8.6},
        {"name": "Park Hyatt Tokyo", "price": "$920"},
        {"name": "Khaosan World Asakusa"}
    ])));
    let registry = apify_registry(Some("token"), &mock);

    let result = registry.execute("search_hotels_apify", tokyo_args()).await.unwrap();

    assert_eq!(result["status"], "success");
    assert_eq!(result["hotels"].as_array().unwrap().len(), 3);
    assert_eq!(result["metadata"]["count"], 3);
    assert_eq!(result["metadata"]["nights"], 5);
    assert_eq!(result["metadata"]["destination"], "Tokyo");
    for hotel in result["hotels"].as_array().unwrap() {
        assert_hotel_fully_formed(hotel);
    }
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_missing_credentials_make_zero_calls() {
    let apify = Arc::new(MockProvider::respond(json!([])));
    let result = apify_registry(None, &apify)
        .execute("search_hotels_apify", tokyo_args())
        .await
        .unwrap();
    assert_eq!(result["status"], "error");
    assert!(result["message"].as_str().unwrap().contains("APIFY_TOKEN"));
    assert_eq!(apify.call_count(), 0);

    let serpapi = Arc::new(MockProvider::respond(json!({})));
    let registry = serpapi_registry(None, &serpapi);

    let hotels = registry.execute("search_hotels_serpapi", tokyo_args()).await.unwrap();
    assert!(hotels["message"].as_str().unwrap().contains("SERPAPI_KEY"));

    let flights = registry
        .execute(
            "search_flights_serpapi",
            json!({"origin": "JFK", "destination": "LHR", "departure_date": "2026-05-01"}),
        )
        .await
        .unwrap();
    assert!(flights["message"].as_str().unwrap().contains("SERPAPI_KEY"));
    assert_eq!(serpapi.call_count(), 0);
}

#[tokio::test]
async fn test_at_most_ten_hotels_in_provider_order() {
    let properties: Vec<Value> = (0..25).map(|i| json!({"name": format!("Hotel {}", i)})).collect();
    let mock = Arc::new(MockProvider::respond(json!({"properties": properties})));
    let registry = serpapi_registry(Some("key"), &mock);

    let result = registry.execute("search_hotels_serpapi", tokyo_args()).await.unwrap();
    let hotels = result["hotels"].as_array().unwrap();

    assert_eq!(hotels.len(), MAX_RESULTS);
    assert_eq!(result["metadata"]["count"], MAX_RESULTS);
    assert_eq!(hotels[0]["name"], "Hotel 0");
    assert_eq!(hotels[9]["name"], "Hotel 9");
}

#[tokio::test]
async fn test_malformed_payloads_become_errors() {
    let cases = [
        json!({"properties": "none"}),
        json!({"properties": [42]}),
        json!({"properties": [{"name": "ok"}, null]}),
    ];

    for payload in cases {
        let mock = Arc::new(MockProvider::respond(payload.clone()));
        let result = serpapi_registry(Some("key"), &mock)
            .execute("search_hotels_serpapi", tokyo_args())
            .await
            .unwrap();

        assert_eq!(result["status"], "error", "payload {} should fail", payload);
        assert!(result.get("hotels").is_none());
    }
}

#[tokio::test]
async fn test_apify_non_list_dataset() {
    let mock = Arc::new(MockProvider::respond(json!({"items": []})));
    let result = apify_registry(Some("token"), &mock)
        .execute("search_hotels_apify", tokyo_args())
        .await
        .unwrap();

    assert_eq!(result["status"], "error");
    assert!(result["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to fetch hotel data:"));
}

#[tokio::test]
async fn test_swapped_dates_give_negative_nights() {
    let mock = Arc::new(MockProvider::respond(json!([])));
    let mut args = tokyo_args();
    args["checkin_date"] = json!("2026-03-20");
    args["checkout_date"] = json!("2026-03-15");

    let result = apify_registry(Some("token"), &mock)
        .execute("search_hotels_apify", args)
        .await
        .unwrap();

    assert_eq!(result["metadata"]["nights"], -5);
    assert_eq!(result["metadata"]["count"], 0);
}

#[tokio::test]
async fn test_unrecognized_budget_uses_default_sort() {
    let mock = Arc::new(MockProvider::respond(json!({"properties": []})));
    let mut args = tokyo_args();
    args["budget_preference"] = json!("whatever");

    let result = serpapi_registry(Some("key"), &mock)
        .execute("search_hotels_serpapi", args)
        .await
        .unwrap();

    assert_eq!(result["status"], "success");
    assert!(mock.calls()[0]["params"].get("sort_by").is_none());
}

#[tokio::test]
async fn test_zero_travelers_is_invalid() {
    let mock = Arc::new(MockProvider::respond(json!([])));
    let mut args = tokyo_args();
    args["travelers"] = json!(0);

    let result = apify_registry(Some("token"), &mock)
        .execute("search_hotels_apify", args)
        .await;

    assert!(matches!(result, Err(ToolError::InvalidParameters(_))));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_research_never_reports_status() {
    let registry = ToolRegistry::new();
    registry
        .register(DestinationResearchTool::new(Some(Arc::new(MockProvider::respond(
            json!({"query": {"search": []}}),
        )))))
        .unwrap();

    let result = registry
        .execute("research_destination", json!({"destination": "Atlantis", "interests": ["diving"]}))
        .await
        .unwrap();

    assert!(result.get("status").is_none());
    assert!(result.get("error").is_none());
    assert_eq!(result["overview"], "Could not find destination on Wikivoyage.");
    assert_eq!(result["interests"], json!(["diving"]));
}

#[tokio::test]
async fn test_research_truncates_long_extracts() {
    let extract = "Kyoto is a city of temples. ".repeat(100);
    let mock = Arc::new(MockProvider::sequence(vec![
        json!({"query": {"search": [{"pageid": 17}]}}),
        json!({"query": {"pages": {"17": {"extract": extract}}}}),
    ]));
    let registry = ToolRegistry::new();
    registry.register(DestinationResearchTool::new(Some(mock))).unwrap();

    let result = registry
        .execute("research_destination", json!({"destination": "Kyoto"}))
        .await
        .unwrap();

    let overview = result["overview"].as_str().unwrap();
    assert_eq!(overview.chars().count(), 1003);
    assert!(overview.ends_with("..."));
    assert_eq!(result["source"], "Wikivoyage");
    assert_eq!(result["duration"], 7);
}
