//! SeedDefaultsHandler - Inserts the default catalogue into an empty deck.

use std::sync::Arc;

use crate::application::handlers::best_effort::{publish_or_warn, save_or_warn};
use crate::domain::foundation::{EventId, SerializableDomainEvent, Timestamp};
use crate::domain::question::{default_questions, QuestionError, QuestionsSeeded, Role};
use crate::ports::{EventPublisher, QuestionRepository};

/// Name used as the aggregate id of seeding events.
pub const DEFAULT_DECK: &str = "default";

/// Command to seed the deck.
#[derive(Debug, Clone, Copy)]
pub struct SeedDefaultsCommand {
    /// Date given to the newest seed question.
    pub now: Timestamp,
}

impl Default for SeedDefaultsCommand {
    fn default() -> Self {
        Self {
            now: Timestamp::now(),
        }
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The deck was empty and the defaults were inserted.
    Seeded { mentor_count: usize, learner_count: usize },
    /// The deck already held questions; nothing was touched.
    AlreadyPopulated,
}

/// Handler for first-launch seeding.
///
/// Seeding is keyed on the deck being empty, so a deck whose every question
/// was deleted is seeded again on the next launch.
pub struct SeedDefaultsHandler {
    repository: Arc<dyn QuestionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SeedDefaultsHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: SeedDefaultsCommand) -> Result<SeedOutcome, QuestionError> {
        let _write = self.repository.write_lock().lock().await;

        if !self.repository.is_empty().await? {
            tracing::debug!("Deck already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let questions = default_questions(cmd.now)?;
        for question in &questions {
            self.repository.insert(question).await?;
        }
        save_or_warn(self.repository.as_ref(), "seed_defaults").await;

        let mentor_count = questions.iter().filter(|q| q.role() == Role::Mentor).count();
        let learner_count = questions.len() - mentor_count;

        tracing::info!(mentor_count, learner_count, "Seeded default questions");

        let event = QuestionsSeeded {
            event_id: EventId::new(),
            deck: DEFAULT_DECK.to_string(),
            mentor_count,
            learner_count,
            seeded_at: cmd.now,
        };
        publish_or_warn(
            self.event_publisher.as_ref(),
            event.to_envelope().with_source("seed"),
        )
        .await;

        Ok(SeedOutcome::Seeded {
            mentor_count,
            learner_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryQuestionRepository;
    use crate::domain::foundation::QuestionId;
    use crate::domain::question::Question;

    #[tokio::test]
    async fn seeds_fifteen_per_role_into_empty_deck() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = SeedDefaultsHandler::new(repo.clone(), bus.clone());

        let outcome = handler.handle(SeedDefaultsCommand::default()).await.unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                mentor_count: 15,
                learner_count: 15
            }
        );
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 30);
        assert!(all.iter().all(|q| q.is_default() && q.average_rating() == 3.0));
        assert!(bus.has_event("questions.seeded.v1"));
        assert_eq!(repo.save_count(), 1);
    }

    #[tokio::test]
    async fn seed_ids_follow_role_ranges() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        SeedDefaultsHandler::new(repo.clone(), Arc::new(InMemoryEventBus::new()))
            .handle(SeedDefaultsCommand::default())
            .await
            .unwrap();

        let mentor = repo.find_by_id(QuestionId::new(1014)).await.unwrap().unwrap();
        let learner = repo.find_by_id(QuestionId::new(2000)).await.unwrap().unwrap();
        assert_eq!(mentor.role(), Role::Mentor);
        assert_eq!(learner.role(), Role::Learner);
        assert_eq!(repo.next_id().await.unwrap(), QuestionId::new(2015));
    }

    #[tokio::test]
    async fn populated_deck_is_left_alone() {
        let existing = Question::new(QuestionId::new(1000), Role::Mentor, "Mine").unwrap();
        let repo = Arc::new(InMemoryQuestionRepository::with_questions(vec![existing]));
        let bus = Arc::new(InMemoryEventBus::new());
        let handler = SeedDefaultsHandler::new(repo.clone(), bus.clone());

        let outcome = handler.handle(SeedDefaultsCommand::default()).await.unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
        assert_eq!(repo.len().await, 1);
        assert_eq!(bus.event_count(), 0);
    }

    #[tokio::test]
    async fn seeding_twice_only_inserts_once() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = SeedDefaultsHandler::new(repo.clone(), Arc::new(InMemoryEventBus::new()));

        handler.handle(SeedDefaultsCommand::default()).await.unwrap();
        let second = handler.handle(SeedDefaultsCommand::default()).await.unwrap();

        assert_eq!(second, SeedOutcome::AlreadyPopulated);
        assert_eq!(repo.len().await, 30);
    }
}
