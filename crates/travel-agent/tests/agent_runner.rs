//! End-to-end agent runner tests over in-process messaging

use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::timeout;

use travel_agent::*;
use travel_core::config::AgentSettings;
use travel_tools::builtin::{DestinationResearchTool, FlightSearchTool};
use travel_tools::providers::mock::MockProvider;
use travel_tools::ToolRegistry;

fn registry() -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry
        .register(DestinationResearchTool::new(Some(Arc::new(MockProvider::sequence(vec![
            json!({"query": {"search": [{"pageid": 3}]}}),
            json!({"query": {"pages": {"3": {"extract": "Lisbon is the capital of Portugal."}}}}),
        ])))))
        .unwrap();
    registry
        .register(FlightSearchTool::new(None, Some(Arc::new(MockProvider::respond(json!({}))))))
        .unwrap();
    registry
}

#[tokio::test]
async fn test_agent_answers_until_shutdown() {
    let (messaging, inbox) = InProcessMessaging::new();
    let agent = TravelAgent::new(&AgentSettings::default(), registry(), Arc::new(messaging.clone()));

    let mut general = messaging.subscribe("general");
    let mut trips = messaging.subscribe("trips");

    let (stop, shutdown) = watch::channel(false);
    let handle = tokio::spawn(async move { agent.run(inbox, shutdown).await });

    messaging
        .deliver(ChannelEvent::new("user-1", json!({"text": "any tips?"})))
        .unwrap();
    let reply = timeout(Duration::from_secs(5), general.recv()).await.unwrap().unwrap();
    assert_eq!(reply.content, "Response: any tips?");

    messaging
        .deliver(ChannelEvent::text("user-1", "trips", r#"/research_destination {"destination": "Lisbon"}"#))
        .unwrap();
    let reply = timeout(Duration::from_secs(5), trips.recv()).await.unwrap().unwrap();
    let overview: Value = serde_json::from_str(&reply.content).unwrap();
    assert_eq!(overview["overview"], "Lisbon is the capital of Portugal.");
    assert_eq!(overview["source"], "Wikivoyage");

    messaging
        .deliver(ChannelEvent::text(
            "user-1",
            "trips",
            r#"/search_flights_serpapi {"origin": "JFK", "destination": "LIS", "departure_date": "2026-06-01"}"#,
        ))
        .unwrap();
    let reply = timeout(Duration::from_secs(5), trips.recv()).await.unwrap().unwrap();
    let result: Value = serde_json::from_str(&reply.content).unwrap();
    assert_eq!(result["status"], "error");
    assert_eq!(result["message"], "SERPAPI_KEY not found.");

    stop.send(true).unwrap();
    timeout(Duration::from_secs(5), handle).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn test_agent_survives_undeliverable_reply() {
    let (messaging, inbox) = InProcessMessaging::new();
    let settings = AgentSettings {
        name: "planner".to_string(),
        default_channel: "lobby".to_string(),
    };
    let agent = TravelAgent::new(&settings, registry(), Arc::new(messaging.clone()));

    let (_stop, shutdown) = watch::channel(false);
    let handle = tokio::spawn(async move { agent.run(inbox, shutdown).await });

    // nobody listens on "void", so this reply is dropped with an error log
    messaging
        .deliver(ChannelEvent::text("user-1", "void", "hello?"))
        .unwrap();

    let mut lobby = messaging.subscribe("lobby");
    messaging
        .deliver(ChannelEvent::new("user-1", json!({"content": "/tools"})))
        .unwrap();

    let reply = timeout(Duration::from_secs(5), lobby.recv()).await.unwrap().unwrap();
    assert_eq!(reply.sender, "planner");
    assert_eq!(
        reply.content,
        "Available tools: research_destination, search_flights_serpapi"
    );

    handle.abort();
}

#[tokio::test]
async fn test_agent_stops_when_inbox_closes() {
    let (messaging, inbox) = InProcessMessaging::new();
    let (_stop, shutdown) = watch::channel(false);

    // The agent's own messaging handle keeps an inbox sender alive, so give
    // it a separate layer and close this one.
    let (other, _other_inbox) = InProcessMessaging::new();
    let agent = TravelAgent::new(&AgentSettings::default(), registry(), Arc::new(other));
    drop(messaging);

    let result = timeout(Duration::from_secs(5), agent.run(inbox, shutdown)).await.unwrap();
    assert!(result.is_ok());
}
