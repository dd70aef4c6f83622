//! In-memory question repository.
//!
//! Holds the deck in a `BTreeMap` keyed by id so iteration is collection
//! order. Staged changes are visible immediately; `save` only counts the
//! commit (or fails on request, for exercising the best-effort save path).

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::question::Question;
use crate::ports::{duplicate_question, question_not_found, QuestionRepository};

/// In-memory storage for the deck
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<BTreeMap<QuestionId, Question>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
    write_lock: Arc<Mutex<()>>,
}

impl InMemoryQuestionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `questions`
    pub fn with_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let map = questions.into_iter().map(|q| (q.id(), q)).collect();
        Self {
            questions: Arc::new(RwLock::new(map)),
            ..Self::default()
        }
    }

    /// Number of successful `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent `save` calls fail
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of stored questions
    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, DomainError> {
        Ok(self.questions.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn insert(&self, question: &Question) -> Result<(), DomainError> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id()) {
            return Err(duplicate_question(question.id()));
        }
        questions.insert(question.id(), question.clone());
        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let mut questions = self.questions.write().await;
        match questions.get_mut(&question.id()) {
            Some(stored) => {
                *stored = question.clone();
                Ok(())
            }
            None => Err(question_not_found(question.id())),
        }
    }

    async fn delete(&self, id: QuestionId) -> Result<(), DomainError> {
        self.questions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| question_not_found(id))
    }

    async fn save(&self) -> Result<(), DomainError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DomainError::database("in-memory save disabled"));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }

    async fn next_id(&self) -> Result<QuestionId, DomainError> {
        Ok(QuestionId::next_after(self.questions.read().await.keys()))
    }

    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.questions.read().await.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::question::Role;

    fn question(id: i64, role: Role) -> Question {
        Question::new(QuestionId::new(id), role, format!("question {}", id)).unwrap()
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(&question(1002, Role::Mentor)).await.unwrap();
        repo.insert(&question(1000, Role::Learner)).await.unwrap();
        repo.insert(&question(1001, Role::Mentor)).await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![1000, 1001, 1002]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let repo = InMemoryQuestionRepository::new();
        repo.insert(&question(1000, Role::Mentor)).await.unwrap();

        let err = repo.insert(&question(1000, Role::Learner)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateQuestion);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = InMemoryQuestionRepository::new();
        let err = repo.update(&question(1000, Role::Mentor)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_question() {
        let repo = InMemoryQuestionRepository::with_questions(vec![question(1000, Role::Mentor)]);

        repo.delete(QuestionId::new(1000)).await.unwrap();

        assert!(repo.find_by_id(QuestionId::new(1000)).await.unwrap().is_none());
        assert!(repo.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryQuestionRepository::new();
        let err = repo.delete(QuestionId::new(4242)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
    }

    #[tokio::test]
    async fn next_id_starts_at_floor_and_follows_max() {
        let repo = InMemoryQuestionRepository::new();
        assert_eq!(repo.next_id().await.unwrap(), QuestionId::new(1000));

        repo.insert(&question(2014, Role::Learner)).await.unwrap();
        assert_eq!(repo.next_id().await.unwrap(), QuestionId::new(2015));
    }

    #[tokio::test]
    async fn save_counts_and_can_fail() {
        let repo = InMemoryQuestionRepository::new();
        repo.save().await.unwrap();
        assert_eq!(repo.save_count(), 1);

        repo.fail_saves(true);
        assert!(repo.save().await.is_err());
        assert_eq!(repo.save_count(), 1);
    }
    #[tokio::test]
    async fn clones_share_the_write_lock() {
        let repo = InMemoryQuestionRepository::new();
        let clone = repo.clone();

        let _held = repo.write_lock().lock().await;

        assert!(clone.write_lock().try_lock().is_err());
    }
}
