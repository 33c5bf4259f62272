//! Integration tests for configuration loading and error handling

use std::io::Write;

use travel_core::{
    config::{load_config, load_config_or_default, TravelConfig, DEFAULT_APIFY_URL},
    error::{Result, TravelError},
    logging::LogConfig,
};

#[test]
fn test_config_loading_defaults() {
    let config = load_config_or_default("nonexistent.toml");
    assert_eq!(config.agent.name, "travel-agent");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.providers.apify_url, DEFAULT_APIFY_URL);
}

#[test]
fn test_load_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");

    writeln!(
        file,
        r#"
[logging]
level = "debug"
json = true

[providers]
serpapi_url = "http://127.0.0.1:8080/search.json"

[agent]
name = "trip-planner"
default_channel = "travel"
"#
    )
    .expect("Failed to write config");

    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert_eq!(config.providers.serpapi_url, "http://127.0.0.1:8080/search.json");
    assert_eq!(config.providers.apify_url, DEFAULT_APIFY_URL);
    assert_eq!(config.agent.name, "trip-planner");
    assert_eq!(config.agent.default_channel, "travel");
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = TravelConfig::default();
    let json = serde_json::to_string(&config).expect("Failed to serialize");
    let deserialized: TravelConfig = serde_json::from_str(&json).expect("Failed to deserialize");

    assert_eq!(config.agent.name, deserialized.agent.name);
    assert_eq!(config.providers.wikivoyage_url, deserialized.providers.wikivoyage_url);
}

#[test]
fn test_error_handling() {
    let result: Result<()> = Err(TravelError::config("test error"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_logging_config_from_file_section() {
    let config = TravelConfig::default();
    let log = LogConfig::from(&config.logging);
    assert_eq!(log.level, "info");
    assert!(!log.json);
}
