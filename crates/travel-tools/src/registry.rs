//! Tool registry for looking up and executing tools by name

use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::{error::ToolError, tool::Tool, Result};

/// Registry for managing tools
///
/// Thread-safe and cheap to clone; clones share the same tool set.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<DashMap<String, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: Arc::new(DashMap::new()),
        }
    }

    /// Register a tool
    ///
    /// # Returns
    /// Error if a tool with the same name is already registered
    pub fn register<T: Tool + 'static>(&self, tool: T) -> Result<()> {
        let name = tool.name().to_string();

        if self.tools.contains_key(&name) {
            return Err(ToolError::AlreadyRegistered(name));
        }

        self.tools.insert(name.clone(), Arc::new(tool));
        tracing::debug!("Registered tool: {}", name);
        Ok(())
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Execute a tool by name
    ///
    /// Provider failures come back inside the returned JSON; `Err` means the
    /// tool is unknown or the arguments were rejected.
    pub async fn execute(&self, name: &str, params: Value) -> Result<Value> {
        let tool = self.get_tool(name).ok_or_else(|| ToolError::not_found(name))?;

        tracing::info!("Executing tool: {} with params: {}", name, params);

        match tool.execute(params).await {
            Ok(result) => {
                tracing::debug!("Tool {} executed successfully", name);
                Ok(result)
            }
            Err(e) => {
                tracing::error!("Tool {} execution failed: {}", name, e);
                Err(e)
            }
        }
    }

    /// Registered tool names, sorted
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    /// Get the number of registered tools
    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// All tools formatted for OpenAI function calling, sorted by name
    pub fn to_openai_functions(&self) -> Vec<Value> {
        self.list_tools()
            .iter()
            .filter_map(|name| self.get_tool(name))
            .map(|tool| {
                tool.parameters_schema()
                    .to_openai_function(tool.name(), tool.description())
            })
            .collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
