//! Question entity.
//!
//! A question is a conversation starter owned by one role's flow. Its average
//! rating is always derived from the rating history and decides whether the
//! question stays in rotation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{average, DomainError, QuestionId, Rating, Timestamp};

use super::{Role, Visibility};

/// Maximum length for question content.
pub const MAX_CONTENT_LENGTH: usize = 1000;

/// Question entity.
///
/// # Invariants
///
/// - `content` is non-empty after trimming and at most 1000 characters
/// - `rating_history` is append-only; each entry is within [0, 5]
/// - `date_added` never changes after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    role: Role,
    content: String,
    rating_history: Vec<Rating>,
    date_added: Timestamp,
    is_default: bool,
}

impl Question {
    /// Create a new user-added question with an empty rating history.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if content is blank or too long
    pub fn new(id: QuestionId, role: Role, content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        Self::validate_content(&content)?;

        Ok(Self {
            id,
            role,
            content,
            rating_history: Vec::new(),
            date_added: Timestamp::now(),
            is_default: false,
        })
    }

    /// Create a seed question flagged as default.
    pub fn seeded(
        id: QuestionId,
        role: Role,
        content: impl Into<String>,
        rating_history: Vec<Rating>,
        date_added: Timestamp,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        Self::validate_content(&content)?;

        Ok(Self {
            id,
            role,
            content,
            rating_history,
            date_added,
            is_default: true,
        })
    }

    /// Reconstitute a question from persistence (no validation).
    pub fn reconstitute(
        id: QuestionId,
        role: Role,
        content: String,
        rating_history: Vec<Rating>,
        date_added: Timestamp,
        is_default: bool,
    ) -> Self {
        Self {
            id,
            role,
            content,
            rating_history,
            date_added,
            is_default,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rating_history(&self) -> &[Rating] {
        &self.rating_history
    }

    pub fn rating_count(&self) -> usize {
        self.rating_history.len()
    }

    pub fn date_added(&self) -> &Timestamp {
        &self.date_added
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Mean of the rating history, 0 when unrated.
    pub fn average_rating(&self) -> f64 {
        average(&self.rating_history)
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_average(self.average_rating())
    }

    /// Whether this question belongs in its role's active rotation.
    pub fn is_in_rotation(&self) -> bool {
        self.visibility().is_visible()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a rating to the history.
    pub fn submit_rating(&mut self, rating: Rating) {
        self.rating_history.push(rating);
    }

    /// Replace the content, returning the previous text.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the new content is blank or too long
    pub fn edit_content(&mut self, new_content: impl Into<String>) -> Result<String, DomainError> {
        let new_content = new_content.into();
        Self::validate_content(&new_content)?;
        Ok(std::mem::replace(&mut self.content, new_content))
    }

    fn validate_content(content: &str) -> Result<(), DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::validation("content", "Content cannot be empty"));
        }
        if content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::validation(
                "content",
                format!("Content cannot exceed {} characters", MAX_CONTENT_LENGTH),
            ));
        }
        Ok(())
    }
}
