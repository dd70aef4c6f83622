//! EventPublisher port - announces deck changes to interested listeners.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events after a mutation has been staged.
///
/// Delivery is fire-and-forget from the caller's point of view: a failure
/// here never rolls back the mutation that produced the event.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order.
    ///
    /// Stops at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EventPublisher for Recording {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            self.seen.lock().unwrap().push(event.event_type);
            Ok(())
        }
    }

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}

    #[tokio::test]
    async fn publish_all_keeps_order() {
        let publisher = Recording {
            seen: Mutex::new(Vec::new()),
        };
        let events = vec![
            EventEnvelope::new("question.added.v1", "1000", "Question", serde_json::json!({})),
            EventEnvelope::new("question.rated.v1", "1000", "Question", serde_json::json!({})),
        ];

        publisher.publish_all(events).await.unwrap();

        assert_eq!(
            *publisher.seen.lock().unwrap(),
            vec!["question.added.v1", "question.rated.v1"]
        );
    }
}
