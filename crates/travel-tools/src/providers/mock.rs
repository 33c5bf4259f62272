//! Scripted provider for testing
//!
//! [`MockProvider`] implements every provider trait. It replays canned JSON
//! payloads (or fails) and records each call so tests can assert how many
//! outbound requests an adapter made and with which arguments.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ApifyClient, ProviderError, ProviderResult, SerpApiClient, SerpApiParams, WikivoyageClient};

/// Mock behavior modes
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return these payloads in order; the last one repeats
    Respond(Vec<Value>),

    /// Fail every call with this message
    Fail(String),
}

/// Provider double with a call counter
pub struct MockProvider {
    mode: MockMode,
    call_count: AtomicUsize,
    calls: Mutex<Vec<Value>>,
}

impl MockProvider {
    /// Mock that always returns `payload`
    pub fn respond(payload: Value) -> Self {
        Self::sequence(vec![payload])
    }

    /// Mock that returns `payloads` one per call
    pub fn sequence(payloads: Vec<Value>) -> Self {
        Self::with_mode(MockMode::Respond(payloads))
    }

    /// Mock that fails every call
    pub fn fail<S: Into<String>>(message: S) -> Self {
        Self::with_mode(MockMode::Fail(message.into()))
    }

    fn with_mode(mode: MockMode) -> Self {
        Self {
            mode,
            call_count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of outbound calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Arguments of every call, in order
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: Value) -> ProviderResult<Value> {
        let index = self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        match &self.mode {
            MockMode::Respond(payloads) => payloads
                .get(index)
                .or_else(|| payloads.last())
                .cloned()
                .ok_or_else(|| ProviderError::api("mock has no payloads")),
            MockMode::Fail(message) => Err(ProviderError::api(message.clone())),
        }
    }
}

#[async_trait]
impl SerpApiClient for MockProvider {
    async fn search(&self, api_key: &str, params: &SerpApiParams) -> ProviderResult<Value> {
        self.record(json!({"api_key": api_key, "params": params}))
    }
}

#[async_trait]
impl ApifyClient for MockProvider {
    async fn run_actor(&self, token: &str, actor_id: &str, input: &Value) -> ProviderResult<Value> {
        self.record(json!({"token": token, "actor_id": actor_id, "input": input}))
    }
}

#[async_trait]
impl WikivoyageClient for MockProvider {
    async fn query(&self, params: &[(&str, String)]) -> ProviderResult<Value> {
        let params: serde_json::Map<String, Value> = params
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.clone())))
            .collect();
        self.record(Value::Object(params))
    }
}
