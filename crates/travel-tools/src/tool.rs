//! Tool trait definition

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Result, ToolError, ToolSchema};

/// Trait for tools that can be called by agents
///
/// A tool receives its arguments as a JSON object and returns the JSON
/// rendering of its result record. Provider failures are part of that record;
/// only framework problems (such as malformed arguments) are returned as `Err`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's unique name
    ///
    /// This is used to identify and call the tool.
    fn name(&self) -> &str;

    /// Get a human-readable description of what the tool does
    ///
    /// This description is included in the LLM prompt to help
    /// the model understand when to use the tool.
    fn description(&self) -> &str;

    /// Get the JSON schema for the tool's parameters
    fn parameters_schema(&self) -> ToolSchema;

    /// Execute the tool with given parameters
    async fn execute(&self, params: Value) -> Result<Value>;
}

/// Deserialize tool arguments, mapping failures to `InvalidParameters`
pub fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T> {
    // Agents often send `null` for "no arguments".
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };

    serde_json::from_value(params).map_err(|e| ToolError::invalid_params(e.to_string()))
}
