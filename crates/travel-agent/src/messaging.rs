//! Messaging trait

use async_trait::async_trait;

use crate::{ChannelMessage, Result};

/// Outbound side of the messaging layer
///
/// Implementations decide how a posted message reaches channel members.
#[async_trait]
pub trait Messaging: Send + Sync {
    /// Post a message to its channel
    async fn post(&self, message: ChannelMessage) -> Result<()>;

    /// Messaging backend name
    fn name(&self) -> &str;
}
