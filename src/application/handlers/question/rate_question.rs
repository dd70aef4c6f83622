//! RateQuestionHandler - Command handler for appending a rating.

use std::sync::Arc;

use crate::application::handlers::best_effort::{publish_or_warn, save_or_warn};
use crate::domain::foundation::{EventId, QuestionId, Rating, SerializableDomainEvent, Timestamp};
use crate::domain::question::{Question, QuestionError, QuestionRated};
use crate::ports::{EventPublisher, QuestionRepository};

/// Command to rate a question.
///
/// `rating` is validated here, so callers can pass raw user input.
#[derive(Debug, Clone)]
pub struct RateQuestionCommand {
    pub question_id: QuestionId,
    pub rating: f64,
}

/// Result of a successful rating.
#[derive(Debug, Clone)]
pub struct RateQuestionResult {
    pub question: Question,
    pub event: QuestionRated,
}

/// Handler for rating questions.
pub struct RateQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    source: &'static str,
}

impl RateQuestionHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            source: "list",
        }
    }

    /// Tag published events with where the change came from.
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    pub async fn handle(&self, cmd: RateQuestionCommand) -> Result<RateQuestionResult, QuestionError> {
        // 1. Validate the rating before touching storage
        let rating = Rating::new(cmd.rating)?;

        let _write = self.repository.write_lock().lock().await;

        // 2. Load question
        let mut question = self
            .repository
            .find_by_id(cmd.question_id)
            .await?
            .ok_or_else(|| QuestionError::not_found(cmd.question_id))?;

        // 3. Append and stage
        let was_in_rotation = question.is_in_rotation();
        question.submit_rating(rating);
        self.repository.update(&question).await?;
        save_or_warn(self.repository.as_ref(), "rate_question").await;

        tracing::debug!(
            question_id = %cmd.question_id,
            rating = rating.value(),
            average = question.average_rating(),
            "Question rated"
        );
        if was_in_rotation != question.is_in_rotation() {
            tracing::info!(
                question_id = %cmd.question_id,
                in_rotation = question.is_in_rotation(),
                "Question crossed the visibility threshold"
            );
        }

        // 4. Announce
        let event = QuestionRated {
            event_id: EventId::new(),
            question_id: cmd.question_id,
            rating,
            average_rating: question.average_rating(),
            rating_count: question.rating_count(),
            in_rotation: question.is_in_rotation(),
            rated_at: Timestamp::now(),
        };
        publish_or_warn(
            self.event_publisher.as_ref(),
            event.to_envelope().with_source(self.source),
        )
        .await;

        Ok(RateQuestionResult { question, event })
    }
}
