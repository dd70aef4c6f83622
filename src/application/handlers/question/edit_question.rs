//! EditQuestionHandler - Command handler for changing a question's text.

use std::sync::Arc;

use crate::application::handlers::best_effort::{publish_or_warn, save_or_warn};
use crate::domain::foundation::{EventId, QuestionId, SerializableDomainEvent, Timestamp};
use crate::domain::question::{Question, QuestionEdited, QuestionError};
use crate::ports::{EventPublisher, QuestionRepository};

/// Command to replace a question's content.
#[derive(Debug, Clone)]
pub struct EditQuestionCommand {
    pub question_id: QuestionId,
    pub content: String,
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct EditQuestionResult {
    pub question: Question,
    pub event: QuestionEdited,
}

/// Handler for editing questions. Ratings and dates are untouched.
pub struct EditQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    source: &'static str,
}

impl EditQuestionHandler {
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

    pub async fn handle(&self, cmd: EditQuestionCommand) -> Result<EditQuestionResult, QuestionError> {
        let _write = self.repository.write_lock().lock().await;

        // 1. Load question
        let mut question = self
            .repository
            .find_by_id(cmd.question_id)
            .await?
            .ok_or_else(|| QuestionError::not_found(cmd.question_id))?;

        // 2. Apply edit (validates content)
        let old_content = question.edit_content(cmd.content.trim())?;

        // 3. Stage and commit
        self.repository.update(&question).await?;
        save_or_warn(self.repository.as_ref(), "edit_question").await;

        tracing::debug!(question_id = %cmd.question_id, "Question edited");

        // 4. Announce
        let event = QuestionEdited {
            event_id: EventId::new(),
            question_id: cmd.question_id,
            old_content,
            new_content: question.content().to_string(),
            edited_at: Timestamp::now(),
        };
        publish_or_warn(
            self.event_publisher.as_ref(),
            event.to_envelope().with_source(self.source),
        )
        .await;

        Ok(EditQuestionResult { question, event })
    }
}
