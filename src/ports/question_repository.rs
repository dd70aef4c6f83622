//! Question repository port.
//!
//! Defines the contract for storing the deck. The UI layer never holds a live
//! query: it calls `list()` again (or listens for change events) after each
//! mutation.
//!
//! # Unit of work
//!
//! - `insert`, `update` and `delete` stage a change
//! - `list` and `find_by_id` observe staged changes
//! - `save` makes staged changes durable; failures are reported but callers
//!   treat them as best-effort
//!
//! The unit of work is shared by every caller of one repository. Mutating
//! commands hold [`QuestionRepository::write_lock`] from their first read
//! until after `save`, so id allocation and read-modify-write updates never
//! interleave.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};
use crate::domain::question::Question;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Repository port for the question collection.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, ordered by id ascending (collection order).
    async fn list(&self) -> Result<Vec<Question>, DomainError>;

    /// Find a question by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError>;

    /// Stage a new question.
    ///
    /// # Errors
    ///
    /// - `DuplicateQuestion` if the id is already taken
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, question: &Question) -> Result<(), DomainError>;

    /// Stage changes to an existing question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, question: &Question) -> Result<(), DomainError>;

    /// Stage permanent removal of a question.
    ///
    /// # Errors
    ///
    /// - `QuestionNotFound` if the question doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: QuestionId) -> Result<(), DomainError>;

    /// Commit staged changes.
    async fn save(&self) -> Result<(), DomainError>;

    /// Lock serializing mutating commands against this repository.
    fn write_lock(&self) -> &Mutex<()>;

    /// Next free id: one past the highest id in the collection.
    async fn next_id(&self) -> Result<QuestionId, DomainError> {
        let ids: Vec<QuestionId> = self.list().await?.iter().map(|q| q.id()).collect();
        Ok(QuestionId::next_after(&ids))
    }

    /// Whether the collection holds no questions at all.
    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.list().await?.is_empty())
    }
}

/// Standard not-found error carrying the id for later mapping.
pub fn question_not_found(id: QuestionId) -> DomainError {
    DomainError::new(ErrorCode::QuestionNotFound, format!("Question not found: {}", id))
        .with_detail("id", id.to_string())
}

/// Standard duplicate-id error.
pub fn duplicate_question(id: QuestionId) -> DomainError {
    DomainError::new(
        ErrorCode::DuplicateQuestion,
        format!("Question id already in use: {}", id),
    )
    .with_detail("id", id.to_string())
}
