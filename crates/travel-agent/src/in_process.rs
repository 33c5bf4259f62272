//! In-process messaging using Tokio channels

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

use crate::{AgentError, ChannelEvent, ChannelMessage, Messaging, Result};

const CHANNEL_CAPACITY: usize = 100;

/// In-process messaging
///
/// Channels are Tokio broadcast senders created on first use. Events for the
/// agent travel over a single unbounded inbox.
#[derive(Clone)]
pub struct InProcessMessaging {
    channels: Arc<DashMap<String, broadcast::Sender<ChannelMessage>>>,
    inbox: mpsc::UnboundedSender<ChannelEvent>,
}

impl InProcessMessaging {
    /// Create the messaging layer and the agent's inbox receiver
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ChannelEvent>) {
        let (inbox, rx) = mpsc::unbounded_channel();
        let messaging = Self {
            channels: Arc::new(DashMap::new()),
            inbox,
        };
        (messaging, rx)
    }

    /// Listen to everything posted on `channel`
    pub fn subscribe(&self, channel: &str) -> broadcast::Receiver<ChannelMessage> {
        self.sender(channel).subscribe()
    }

    /// Deliver an event to the agent
    pub fn deliver(&self, event: ChannelEvent) -> Result<()> {
        self.inbox
            .send(event)
            .map_err(|e| AgentError::delivery_failed(e.to_string()))
    }

    fn sender(&self, channel: &str) -> broadcast::Sender<ChannelMessage> {
        self.channels
            .entry(channel.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }
}

#[async_trait]
impl Messaging for InProcessMessaging {
    async fn post(&self, message: ChannelMessage) -> Result<()> {
        let channel = message.channel.clone();
        self.sender(&channel)
            .send(message)
            .map_err(|_| AgentError::delivery_failed(format!("no listeners on channel '{}'", channel)))?;

        tracing::debug!("Posted message to channel {}", channel);
        Ok(())
    }

    fn name(&self) -> &str {
        "in_process"
    }
}
