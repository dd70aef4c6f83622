//! Handlers that fan deck changes out of the bus.
//!
//! - `ChangeFeed` re-broadcasts every envelope on a tokio broadcast channel
//!   so HTTP clients can stream changes and refresh their view
//! - `ChangeLogger` writes one structured log line per change

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Default number of envelopes a slow subscriber may lag behind.
pub const DEFAULT_FEED_CAPACITY: usize = 256;

/// Broadcasts deck changes to any number of live listeners.
#[derive(Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<EventEnvelope>,
}

impl ChangeFeed {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Opens a new receiver that sees every change published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}

#[async_trait]
impl EventHandler for ChangeFeed {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        // No listeners is not an error.
        let _ = self.sender.send(event);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ChangeFeed"
    }
}

/// Logs every deck change at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChangeLogger;

#[async_trait]
impl EventHandler for ChangeLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            source = event.metadata.source.as_deref().unwrap_or("-"),
            "Deck changed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ChangeLogger"
    }
}
