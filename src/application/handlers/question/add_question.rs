//! AddQuestionHandler - Command handler for user-added questions.

use std::sync::Arc;

use crate::application::handlers::best_effort::{publish_or_warn, save_or_warn};
use crate::domain::foundation::{EventId, SerializableDomainEvent};
use crate::domain::question::{Question, QuestionAdded, QuestionError, Role};
use crate::ports::{EventPublisher, QuestionRepository};

/// Command to add a question to a role's deck.
#[derive(Debug, Clone)]
pub struct AddQuestionCommand {
    pub role: Role,
    pub content: String,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddQuestionResult {
    pub question: Question,
    pub event: QuestionAdded,
}

/// Handler for adding questions.
///
/// New questions start unrated and are therefore outside the rotation until
/// their first rating brings the average up to the threshold.
pub struct AddQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    source: &'static str,
}

impl AddQuestionHandler {
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

    pub async fn handle(&self, cmd: AddQuestionCommand) -> Result<AddQuestionResult, QuestionError> {
        let _write = self.repository.write_lock().lock().await;

        // 1. Allocate id and build the question (validates content)
        let id = self.repository.next_id().await?;
        let question = Question::new(id, cmd.role, cmd.content.trim())?;

        // 2. Stage and commit
        self.repository.insert(&question).await?;
        save_or_warn(self.repository.as_ref(), "add_question").await;

        tracing::debug!(question_id = %id, role = %cmd.role, "Question added");

        // 3. Announce
        let event = QuestionAdded {
            event_id: EventId::new(),
            question_id: id,
            role: cmd.role,
            content: question.content().to_string(),
            added_at: *question.date_added(),
        };
        publish_or_warn(
            self.event_publisher.as_ref(),
            event.to_envelope().with_source(self.source),
        )
        .await;

        Ok(AddQuestionResult { question, event })
    }
}
