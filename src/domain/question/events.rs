//! Question domain events.
//!
//! Published after every change to the deck so the UI layer can refresh
//! instead of holding a live query.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, QuestionId, Rating, Timestamp};
use crate::domain_event;

use super::Role;

/// Every event type a deck change can produce.
pub const DECK_EVENT_TYPES: [&str; 5] = [
    "question.added.v1",
    "question.edited.v1",
    "question.rated.v1",
    "question.deleted.v1",
    "questions.seeded.v1",
];

/// Published when a question is added by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAdded {
    pub event_id: EventId,
    pub question_id: QuestionId,
    pub role: Role,
    pub content: String,
    pub added_at: Timestamp,
}

domain_event!(
    QuestionAdded,
    event_type = "question.added.v1",
    schema_version = 1,
    aggregate_id = question_id,
    aggregate_type = "Question",
    occurred_at = added_at,
    event_id = event_id
);

/// Published when a question's content changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionEdited {
    pub event_id: EventId,
    pub question_id: QuestionId,
    pub old_content: String,
    pub new_content: String,
    pub edited_at: Timestamp,
}

domain_event!(
    QuestionEdited,
    event_type = "question.edited.v1",
    schema_version = 1,
    aggregate_id = question_id,
    aggregate_type = "Question",
    occurred_at = edited_at,
    event_id = event_id
);

/// Published when a rating is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRated {
    pub event_id: EventId,
    pub question_id: QuestionId,
    pub rating: Rating,
    pub average_rating: f64,
    pub rating_count: usize,
    /// Whether the question is still in its role's rotation after this rating.
    pub in_rotation: bool,
    pub rated_at: Timestamp,
}

domain_event!(
    QuestionRated,
    event_type = "question.rated.v1",
    schema_version = 1,
    aggregate_id = question_id,
    aggregate_type = "Question",
    occurred_at = rated_at,
    event_id = event_id
);

/// Published when a question is permanently removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDeleted {
    pub event_id: EventId,
    pub question_id: QuestionId,
    pub role: Role,
    pub deleted_at: Timestamp,
}

domain_event!(
    QuestionDeleted,
    event_type = "question.deleted.v1",
    schema_version = 1,
    aggregate_id = question_id,
    aggregate_type = "Question",
    occurred_at = deleted_at,
    event_id = event_id
);

/// Published once when the default questions are inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionsSeeded {
    pub event_id: EventId,
    pub deck: String,
    pub mentor_count: usize,
    pub learner_count: usize,
    pub seeded_at: Timestamp,
}

domain_event!(
    QuestionsSeeded,
    event_type = "questions.seeded.v1",
    schema_version = 1,
    aggregate_id = deck,
    aggregate_type = "Deck",
    occurred_at = seeded_at,
    event_id = event_id
);
