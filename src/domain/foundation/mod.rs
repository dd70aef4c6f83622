//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the deck.

mod errors;
mod events;
mod ids;
mod rating;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{QuestionId, FIRST_QUESTION_ID};
pub use rating::{average, Rating, MAX_RATING, MIN_RATING};
pub use timestamp::Timestamp;
