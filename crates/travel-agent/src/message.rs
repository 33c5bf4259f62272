//! Channel events and messages

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event delivered to the agent
///
/// The payload is whatever the messaging layer attached; the agent reads the
/// text from `content` (or `text`) and the reply channel from `channel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEvent {
    /// Event ID
    pub id: String,

    /// Who produced the event
    pub sender: String,

    /// Event payload
    pub payload: Value,

    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChannelEvent {
    /// Create a new event
    pub fn new<S: Into<String>>(sender: S, payload: Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender: sender.into(),
            payload,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Event carrying a text message posted to `channel`
    pub fn text<S: Into<String>>(sender: S, channel: &str, text: &str) -> Self {
        Self::new(
            sender,
            serde_json::json!({"channel": channel, "content": text}),
        )
    }

    /// Message text: non-empty payload `content`, else `text`
    pub fn message_text(&self) -> Option<&str> {
        ["content", "text"]
            .iter()
            .find_map(|key| {
                self.payload
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.is_empty())
            })
    }

    /// Channel named in the payload, if any
    pub fn channel(&self) -> Option<&str> {
        self.payload
            .get("channel")
            .and_then(Value::as_str)
            .filter(|channel| !channel.is_empty())
    }
}

/// Message posted to a channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelMessage {
    /// Message ID
    pub id: String,

    /// Target channel
    pub channel: String,

    /// Posting agent
    pub sender: String,

    /// Message text
    pub content: String,

    /// Event this message answers
    pub in_reply_to: Option<String>,

    /// Timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChannelMessage {
    /// Create a new message
    pub fn new<S: Into<String>>(channel: S, sender: S, content: S) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel: channel.into(),
            sender: sender.into(),
            content: content.into(),
            in_reply_to: None,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Mark this message as the answer to `event`
    pub fn replying_to(mut self, event: &ChannelEvent) -> Self {
        self.in_reply_to = Some(event.id.clone());
        self
    }
}
