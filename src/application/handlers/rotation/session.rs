//! RotationSession - per-role circular browsing over the visible deck.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::handlers::question::{
    AddQuestionCommand, AddQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    EditQuestionCommand, EditQuestionHandler, RateQuestionCommand, RateQuestionHandler,
};
use crate::domain::foundation::QuestionId;
use crate::domain::question::{Question, QuestionError, Role};
use crate::domain::rotation::{rotation_for, RotationCursor};
use crate::ports::{EventPublisher, QuestionRepository};

use super::view::{RotationChange, RotationView};

const SOURCE: &str = "rotation";

/// Keeps one cursor per role and applies commands to the current question.
///
/// The rotation itself is recomputed from the repository on every call, so
/// the cursor never holds stale question references; it is clamped against
/// the fresh length each time.
pub struct RotationSession {
    repository: Arc<dyn QuestionRepository>,
    add_handler: AddQuestionHandler,
    edit_handler: EditQuestionHandler,
    delete_handler: DeleteQuestionHandler,
    rate_handler: RateQuestionHandler,
    cursors: Mutex<HashMap<Role, RotationCursor>>,
}

impl RotationSession {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            add_handler: AddQuestionHandler::new(repository.clone(), event_publisher.clone())
                .with_source(SOURCE),
            edit_handler: EditQuestionHandler::new(repository.clone(), event_publisher.clone())
                .with_source(SOURCE),
            delete_handler: DeleteQuestionHandler::new(repository.clone(), event_publisher.clone())
                .with_source(SOURCE),
            rate_handler: RateQuestionHandler::new(repository.clone(), event_publisher)
                .with_source(SOURCE),
            repository,
            cursors: Mutex::new(HashMap::new()),
        }
    }

    /// Current question of `role`'s rotation.
    pub async fn current(&self, role: Role) -> Result<RotationView, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let deck = self.repository.list().await?;
        Ok(view_of(role, cursor, &deck))
    }

    /// Advance to the next question, wrapping past the end.
    pub async fn next(&self, role: Role) -> Result<RotationView, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let deck = self.repository.list().await?;
        cursor.next(rotation_for(role, &deck).len());
        tracing::debug!(%role, index = cursor.index(), "Rotation advanced");
        Ok(view_of(role, cursor, &deck))
    }

    /// Step back to the previous question, wrapping before the start.
    pub async fn previous(&self, role: Role) -> Result<RotationView, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let deck = self.repository.list().await?;
        cursor.previous(rotation_for(role, &deck).len());
        tracing::debug!(%role, index = cursor.index(), "Rotation stepped back");
        Ok(view_of(role, cursor, &deck))
    }

    /// Rate the current question.
    ///
    /// If the rating drops it below the threshold it leaves the rotation and
    /// the cursor lands on the question that followed it.
    pub async fn rate_current(&self, role: Role, rating: f64) -> Result<RotationChange, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let question_id = self.current_id(role, cursor).await?;

        let result = self
            .rate_handler
            .handle(RateQuestionCommand {
                question_id,
                rating,
            })
            .await?;

        let deck = self.repository.list().await?;
        Ok(RotationChange {
            affected: result.question,
            view: view_of(role, cursor, &deck),
        })
    }

    /// Replace the current question's content.
    pub async fn edit_current(
        &self,
        role: Role,
        content: String,
    ) -> Result<RotationChange, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let question_id = self.current_id(role, cursor).await?;

        let result = self
            .edit_handler
            .handle(EditQuestionCommand {
                question_id,
                content,
            })
            .await?;

        let deck = self.repository.list().await?;
        Ok(RotationChange {
            affected: result.question,
            view: view_of(role, cursor, &deck),
        })
    }

    /// Permanently delete the current question.
    pub async fn delete_current(&self, role: Role) -> Result<RotationChange, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();
        let question_id = self.current_id(role, cursor).await?;

        let result = self
            .delete_handler
            .handle(DeleteQuestionCommand { question_id })
            .await?;

        let deck = self.repository.list().await?;
        Ok(RotationChange {
            affected: result.question,
            view: view_of(role, cursor, &deck),
        })
    }

    /// Add a question to `role`. The cursor does not move.
    pub async fn add(&self, role: Role, content: String) -> Result<RotationChange, QuestionError> {
        let mut cursors = self.cursors.lock().await;
        let cursor = cursors.entry(role).or_default();

        let result = self
            .add_handler
            .handle(AddQuestionCommand { role, content })
            .await?;

        let deck = self.repository.list().await?;
        Ok(RotationChange {
            affected: result.question,
            view: view_of(role, cursor, &deck),
        })
    }

    async fn current_id(
        &self,
        role: Role,
        cursor: &mut RotationCursor,
    ) -> Result<QuestionId, QuestionError> {
        let deck = self.repository.list().await?;
        let rotation = rotation_for(role, &deck);
        cursor.clamp(rotation.len());
        cursor
            .current(rotation.len())
            .map(|index| rotation[index].id())
            .ok_or(QuestionError::NothingSelected(role))
    }
}

/// Builds the view for `role`, clamping `cursor` to the current rotation.
fn view_of(role: Role, cursor: &mut RotationCursor, deck: &[Question]) -> RotationView {
    let rotation = rotation_for(role, deck);
    let total = rotation.len();
    let index = cursor.clamp(total);
    RotationView {
        role,
        current: cursor.current(total).map(|i| rotation[i].clone()),
        index,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::memory::InMemoryQuestionRepository;
    use crate::domain::foundation::{Rating, Timestamp};

    fn question(id: i64, role: Role, ratings: &[f64]) -> Question {
        Question::reconstitute(
            QuestionId::new(id),
            role,
            format!("q{}", id),
            ratings.iter().map(|r| Rating::new(*r).unwrap()).collect(),
            Timestamp::now(),
            true,
        )
    }

    fn session(questions: Vec<Question>) -> (RotationSession, Arc<InMemoryEventBus>) {
        let repo = Arc::new(InMemoryQuestionRepository::with_questions(questions));
        let bus = Arc::new(InMemoryEventBus::new());
        (RotationSession::new(repo, bus.clone()), bus)
    }

    fn mentor_deck() -> Vec<Question> {
        vec![
            question(1000, Role::Mentor, &[3.0]),
            question(1001, Role::Mentor, &[3.0]),
            question(1002, Role::Mentor, &[1.0]),
            question(1003, Role::Mentor, &[4.0]),
            question(2000, Role::Learner, &[3.0]),
        ]
    }

    fn current_id(view: &RotationView) -> Option<i64> {
        view.current.as_ref().map(|q| q.id().value())
    }

    #[tokio::test]
    async fn starts_at_first_visible_question() {
        let (session, _) = session(mentor_deck());

        let view = session.current(Role::Mentor).await.unwrap();

        assert_eq!(current_id(&view), Some(1000));
        assert_eq!(view.index, 0);
        assert_eq!(view.total, 3);
    }

    #[tokio::test]
    async fn next_skips_excluded_and_wraps() {
        let (session, _) = session(mentor_deck());

        let ids = [
            current_id(&session.next(Role::Mentor).await.unwrap()),
            current_id(&session.next(Role::Mentor).await.unwrap()),
            current_id(&session.next(Role::Mentor).await.unwrap()),
        ];

        assert_eq!(ids, [Some(1001), Some(1003), Some(1000)]);
    }

    #[tokio::test]
    async fn previous_wraps_to_last() {
        let (session, _) = session(mentor_deck());

        let view = session.previous(Role::Mentor).await.unwrap();

        assert_eq!(current_id(&view), Some(1003));
        assert_eq!(view.index, 2);
    }

    #[tokio::test]
    async fn roles_keep_independent_cursors() {
        let (session, _) = session(mentor_deck());

        session.next(Role::Mentor).await.unwrap();
        let learner = session.current(Role::Learner).await.unwrap();
        let mentor = session.current(Role::Mentor).await.unwrap();

        assert_eq!(current_id(&learner), Some(2000));
        assert_eq!(current_id(&mentor), Some(1001));
    }

    #[tokio::test]
    async fn low_ratings_remove_current_and_land_on_next() {
        let (session, bus) = session(mentor_deck());

        // [3, 1] averages exactly 2.0 and stays in rotation.
        let first = session.rate_current(Role::Mentor, 1.0).await.unwrap();
        assert_eq!(current_id(&first.view), Some(1000));

        let change = session.rate_current(Role::Mentor, 1.0).await.unwrap();

        assert_eq!(change.affected.id(), QuestionId::new(1000));
        assert!(!change.affected.is_in_rotation());
        assert_eq!(change.view.total, 2);
        assert_eq!(change.view.index, 0);
        assert_eq!(current_id(&change.view), Some(1001));

        let envelope = &bus.events_of_type("question.rated.v1")[1];
        assert_eq!(envelope.metadata.source.as_deref(), Some("rotation"));
    }

    #[tokio::test]
    async fn deleting_last_clamps_cursor() {
        let (session, _) = session(mentor_deck());
        session.previous(Role::Mentor).await.unwrap();

        let change = session.delete_current(Role::Mentor).await.unwrap();

        assert_eq!(change.affected.id(), QuestionId::new(1003));
        assert_eq!(change.view.index, 1);
        assert_eq!(current_id(&change.view), Some(1001));
    }

    #[tokio::test]
    async fn deleting_everything_leaves_empty_view() {
        let (session, _) = session(vec![question(2000, Role::Learner, &[3.0])]);

        let change = session.delete_current(Role::Learner).await.unwrap();

        assert!(change.view.is_empty());
        assert_eq!(change.view.index, 0);
        assert!(change.view.current.is_none());
        assert_eq!(
            session.delete_current(Role::Learner).await.unwrap_err(),
            QuestionError::NothingSelected(Role::Learner)
        );
    }

    #[tokio::test]
    async fn navigating_empty_rotation_yields_zero() {
        let (session, _) = session(Vec::new());

        let view = session.next(Role::Mentor).await.unwrap();
        assert_eq!(view.index, 0);
        assert!(view.current.is_none());

        let view = session.previous(Role::Mentor).await.unwrap();
        assert_eq!(view.index, 0);
    }

    #[tokio::test]
    async fn edit_current_changes_content_in_place() {
        let (session, _) = session(mentor_deck());
        session.next(Role::Mentor).await.unwrap();

        let change = session
            .edit_current(Role::Mentor, "Reworded?".to_string())
            .await
            .unwrap();

        assert_eq!(change.affected.id(), QuestionId::new(1001));
        assert_eq!(change.view.current.unwrap().content(), "Reworded?");
        assert_eq!(change.view.index, 1);
    }

    #[tokio::test]
    async fn add_keeps_cursor_and_new_question_waits_for_rating() {
        let (session, bus) = session(mentor_deck());
        session.next(Role::Mentor).await.unwrap();

        let change = session
            .add(Role::Mentor, "Fresh question?".to_string())
            .await
            .unwrap();

        assert_eq!(change.affected.id(), QuestionId::new(2001));
        assert_eq!(change.affected.role(), Role::Mentor);
        assert_eq!(change.view.index, 1);
        assert_eq!(change.view.total, 3);
        assert!(bus.has_event("question.added.v1"));
    }

    #[tokio::test]
    async fn rating_empty_rotation_is_nothing_selected() {
        let (session, _) = session(vec![question(1000, Role::Mentor, &[0.0])]);

        let result = session.rate_current(Role::Mentor, 5.0).await;

        assert_eq!(result.unwrap_err(), QuestionError::NothingSelected(Role::Mentor));
    }
}
