//! DeleteQuestionHandler - Command handler for permanent removal.

use std::sync::Arc;

use crate::application::handlers::best_effort::{publish_or_warn, save_or_warn};
use crate::domain::foundation::{EventId, QuestionId, SerializableDomainEvent, Timestamp};
use crate::domain::question::{Question, QuestionDeleted, QuestionError};
use crate::ports::{EventPublisher, QuestionRepository};

/// Command to delete a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub question_id: QuestionId,
}

/// Result of a successful delete.
#[derive(Debug, Clone)]
pub struct DeleteQuestionResult {
    /// The question as it was just before removal.
    pub question: Question,
    pub event: QuestionDeleted,
}

/// Handler for deleting questions. There is no undo.
pub struct DeleteQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    source: &'static str,
}

impl DeleteQuestionHandler {
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

    pub async fn handle(
        &self,
        cmd: DeleteQuestionCommand,
    ) -> Result<DeleteQuestionResult, QuestionError> {
        let _write = self.repository.write_lock().lock().await;

        let question = self
            .repository
            .find_by_id(cmd.question_id)
            .await?
            .ok_or_else(|| QuestionError::not_found(cmd.question_id))?;

        self.repository.delete(cmd.question_id).await?;
        save_or_warn(self.repository.as_ref(), "delete_question").await;

        tracing::debug!(question_id = %cmd.question_id, role = %question.role(), "Question deleted");

        let event = QuestionDeleted {
            event_id: EventId::new(),
            question_id: cmd.question_id,
            role: question.role(),
            deleted_at: Timestamp::now(),
        };
        publish_or_warn(
            self.event_publisher.as_ref(),
            event.to_envelope().with_source(self.source),
        )
        .await;

        Ok(DeleteQuestionResult { question, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryQuestionRepository;
    use crate::domain::question::Role;

    fn repo_with(ids: &[i64]) -> Arc<InMemoryQuestionRepository> {
        let questions = ids
            .iter()
            .map(|id| Question::new(QuestionId::new(*id), Role::Learner, format!("q{}", id)).unwrap());
        Arc::new(InMemoryQuestionRepository::with_questions(questions))
    }

    #[tokio::test]
    async fn deletes_question_permanently() {
        let repo = repo_with(&[1000, 1001]);
        let handler = DeleteQuestionHandler::new(repo.clone(), Arc::new(InMemoryEventBus::new()));

        let result = handler
            .handle(DeleteQuestionCommand {
                question_id: QuestionId::new(1000),
            })
            .await
            .unwrap();

        assert_eq!(result.question.content(), "q1000");
        assert!(repo.find_by_id(QuestionId::new(1000)).await.unwrap().is_none());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn publishes_question_deleted_with_role() {
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = DeleteQuestionHandler::new(repo_with(&[1000]), bus.clone());

        let result = handler
            .handle(DeleteQuestionCommand {
                question_id: QuestionId::new(1000),
            })
            .await
            .unwrap();

        assert_eq!(result.event.role, Role::Learner);
        assert_eq!(bus.events_of_type("question.deleted.v1").len(), 1);
    }

    #[tokio::test]
    async fn deleting_twice_is_not_found() {
        let repo = repo_with(&[1000]);
        let handler = DeleteQuestionHandler::new(repo, Arc::new(InMemoryEventBus::new()));
        let cmd = DeleteQuestionCommand {
            question_id: QuestionId::new(1000),
        };

        handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await;

        assert_eq!(second.unwrap_err(), QuestionError::NotFound(QuestionId::new(1000)));
    }
}
