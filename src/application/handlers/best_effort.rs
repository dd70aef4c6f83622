//! Side effects that never fail the command that triggered them.
//!
//! Saving the deck and announcing changes both run after the change has
//! been staged; a failure is logged and the command still succeeds.

use crate::domain::foundation::EventEnvelope;
use crate::ports::{EventPublisher, QuestionRepository};

/// Commit staged changes, logging on failure.
pub(crate) async fn save_or_warn(repository: &dyn QuestionRepository, operation: &'static str) {
    if let Err(e) = repository.save().await {
        tracing::warn!(operation, error = %e, "Failed to save deck");
    }
}

/// Publish a change notification, logging on failure.
pub(crate) async fn publish_or_warn(publisher: &dyn EventPublisher, envelope: EventEnvelope) {
    let event_type = envelope.event_type.clone();
    if let Err(e) = publisher.publish(envelope).await {
        tracing::warn!(%event_type, error = %e, "Failed to publish deck change");
    }
}
