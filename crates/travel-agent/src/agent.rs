//! Agent runner
//!
//! The agent reads events from its inbox, turns each into a reply and posts
//! the reply to the event's channel. Text of the form `/<tool> <json>` runs a
//! registered tool; `/tools` lists them; anything else is echoed back.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use travel_core::config::AgentSettings;
use travel_tools::ToolRegistry;

use crate::{AgentError, ChannelEvent, ChannelMessage, Messaging, Result};

/// Chat agent backed by the travel tools
pub struct TravelAgent {
    name: String,
    default_channel: String,
    tools: ToolRegistry,
    messaging: Arc<dyn Messaging>,
}

/// A parsed chat command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `/tools`
    ListTools,

    /// `/<tool> [json]`
    Tool { name: String, args: Value },

    /// Plain text
    Say(String),
}

impl Command {
    /// Parse message text
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let Some(command) = text.strip_prefix('/') else {
            return Ok(Self::Say(text.to_string()));
        };

        let (name, rest) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));
        let rest = rest.trim();

        if name == "tools" && rest.is_empty() {
            return Ok(Self::ListTools);
        }

        let args = if rest.is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(rest).map_err(|e| AgentError::invalid_command(e.to_string()))?
        };

        Ok(Self::Tool {
            name: name.to_string(),
            args,
        })
    }
}

impl TravelAgent {
    /// Create an agent that answers with `tools` over `messaging`
    pub fn new(settings: &AgentSettings, tools: ToolRegistry, messaging: Arc<dyn Messaging>) -> Self {
        Self {
            name: settings.name.clone(),
            default_channel: settings.default_channel.clone(),
            tools,
            messaging,
        }
    }

    /// Agent name, used as the sender of replies
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reply text for one message
    ///
    /// Tool and argument failures are reported in the reply rather than
    /// returned, so a bad command never stops the agent.
    pub async fn reply_for(&self, text: &str) -> String {
        match self.run_command(text).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Command failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }

    async fn run_command(&self, text: &str) -> Result<String> {
        match Command::parse(text)? {
            Command::ListTools => Ok(format!("Available tools: {}", self.tools.list_tools().join(", "))),
            Command::Tool { name, args } => {
                let result = self.tools.execute(&name, args).await?;
                Ok(serde_json::to_string_pretty(&result)?)
            }
            Command::Say(text) => Ok(format!("Response: {}", text)),
        }
    }

    /// Handle one event, posting and returning the reply
    ///
    /// Events without text are ignored.
    pub async fn react(&self, event: &ChannelEvent) -> Result<Option<ChannelMessage>> {
        let Some(text) = event.message_text() else {
            tracing::debug!("Ignoring event {} without text", event.id);
            return Ok(None);
        };

        let channel = event.channel().unwrap_or(self.default_channel.as_str());
        let reply = self.reply_for(text).await;

        let message = ChannelMessage::new(channel, self.name.as_str(), reply.as_str()).replying_to(event);
        self.messaging.post(message.clone()).await?;
        Ok(Some(message))
    }

    /// Process events until the inbox closes or `shutdown` flips to `true`
    pub async fn run(
        &self,
        mut inbox: mpsc::UnboundedReceiver<ChannelEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<()> {
        tracing::info!(
            "Agent {} is running with {} tools (messaging: {})",
            self.name,
            self.tools.count(),
            self.messaging.name()
        );

        loop {
            tokio::select! {
                event = inbox.recv() => {
                    let Some(event) = event else {
                        tracing::info!("Inbox closed, agent {} stopping", self.name);
                        break;
                    };
                    if let Err(e) = self.react(&event).await {
                        tracing::error!("Failed to answer event {}: {}", event.id, e);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Agent {} shutting down", self.name);
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InProcessMessaging;
    use serde_json::json;
    use travel_tools::builtin::BudgetTool;

    fn agent() -> (TravelAgent, InProcessMessaging) {
        let (messaging, _inbox) = InProcessMessaging::new();
        let tools = ToolRegistry::new();
        tools.register(BudgetTool).unwrap();

        let agent = TravelAgent::new(&AgentSettings::default(), tools, Arc::new(messaging.clone()));
        (agent, messaging)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("hello there").unwrap(), Command::Say("hello there".to_string()));
        assert_eq!(Command::parse(" /tools ").unwrap(), Command::ListTools);
        assert_eq!(
            Command::parse("/create_itinerary").unwrap(),
            Command::Tool {
                name: "create_itinerary".to_string(),
                args: json!({})
            }
        );
        assert_eq!(
            Command::parse("/calculate_budget {\"duration\": 3}").unwrap(),
            Command::Tool {
                name: "calculate_budget".to_string(),
                args: json!({"duration": 3})
            }
        );
        assert!(matches!(
            Command::parse("/calculate_budget {oops"),
            Err(AgentError::InvalidCommand(_))
        ));
    }

    #[tokio::test]
    async fn test_echo_reply_on_default_channel() {
        let (agent, messaging) = agent();
        let mut general = messaging.subscribe("general");

        let event = ChannelEvent::new("user-1", json!({"text": "hi"}));
        let reply = agent.react(&event).await.unwrap().unwrap();

        assert_eq!(reply.content, "Response: hi");
        assert_eq!(reply.channel, "general");
        assert_eq!(general.recv().await.unwrap().sender, "travel-agent");
    }

    #[tokio::test]
    async fn test_empty_event_is_ignored() {
        let (agent, _messaging) = agent();
        let event = ChannelEvent::new("user-1", json!({"content": ""}));

        assert!(agent.react(&event).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_tool_command() {
        let (agent, _messaging) = agent();

        let reply = agent
            .reply_for(r#"/calculate_budget {"destination": "Paris", "duration": 3, "travelers": 2, "style": "luxury"}"#)
            .await;
        let value: Value = serde_json::from_str(&reply).unwrap();
        assert_eq!(value["totals"]["total_for_group"], 6900);

        assert_eq!(agent.reply_for("/tools").await, "Available tools: calculate_budget");
        assert_eq!(agent.reply_for("/search_trains").await, "Error: Tool not found: search_trains");
    }
}
