//! Travel Agent Runner
//!
//! Connects the travel tools to a chat messaging layer.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use travel_agent::{ChannelEvent, InProcessMessaging, TravelAgent};
//! use travel_core::TravelConfig;
//! use travel_tools::ToolRegistry;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TravelConfig::default();
//!     let (messaging, inbox) = InProcessMessaging::new();
//!     let agent = TravelAgent::new(&config.agent, ToolRegistry::new(), Arc::new(messaging.clone()));
//!
//!     let mut replies = messaging.subscribe("general");
//!     messaging.deliver(ChannelEvent::text("user-1", "general", "hello"))?;
//!
//!     let (_stop, shutdown) = tokio::sync::watch::channel(false);
//!     tokio::spawn(async move { agent.run(inbox, shutdown).await });
//!
//!     println!("{}", replies.recv().await?.content);
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod error;
pub mod in_process;
pub mod message;
pub mod messaging;

// Re-exports
pub use agent::{Command, TravelAgent};
pub use error::{AgentError, Result};
pub use in_process::InProcessMessaging;
pub use message::{ChannelEvent, ChannelMessage};
pub use messaging::Messaging;
