//! JSON Schema for tool parameters

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema for tool parameters
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolSchema {
    /// Type (usually "object" for tool parameters)
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Properties of the object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    /// Required properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Description of the schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: None,
            required: None,
            description: None,
        }
    }

    /// Set properties
    pub fn with_properties(mut self, properties: Value) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Set required fields
    pub fn with_required(mut self, required: &[&str]) -> Self {
        self.required = Some(required.iter().map(|name| name.to_string()).collect());
        self
    }

    /// Set description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Convert to OpenAI function format
    pub fn to_openai_function(&self, name: &str, description: &str) -> Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": name,
                "description": description,
                "parameters": self,
            }
        })
    }
}

impl Default for ToolSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a simple property schema
pub fn property(type_name: &str, description: &str) -> Value {
    serde_json::json!({
        "type": type_name,
        "description": description,
    })
}

/// Helper to create a property schema with a default value
pub fn property_with_default(type_name: &str, description: &str, default: Value) -> Value {
    serde_json::json!({
        "type": type_name,
        "description": description,
        "default": default,
    })
}

/// Schema for the shared `budget_preference` argument
pub fn budget_preference_property() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "Budget preference steering result ranking",
        "enum": ["budget", "mid-range", "luxury"],
        "default": "mid-range",
    })
}
