//! Question domain module.
//!
//! A question is a conversation starter that belongs to either the mentor or
//! the learner flow. Ratings accumulate in an append-only history and the
//! average decides whether the question stays in rotation.
//!
//! # Events
//!
//! - `QuestionAdded` - A user added a question
//! - `QuestionEdited` - Content changed
//! - `QuestionRated` - A rating was appended
//! - `QuestionDeleted` - A question was permanently removed
//! - `QuestionsSeeded` - The default catalogue was inserted

mod aggregate;
mod errors;
mod events;
mod role;
mod seed;
mod visibility;

pub use aggregate::{Question, MAX_CONTENT_LENGTH};
pub use errors::QuestionError;
pub use events::{
    QuestionAdded, QuestionDeleted, QuestionEdited, QuestionRated, QuestionsSeeded,
    DECK_EVENT_TYPES,
};
pub use role::Role;
pub use seed::{
    default_questions, LEARNER_SEEDS, LEARNER_SEED_BASE_ID, MENTOR_SEEDS, MENTOR_SEED_BASE_ID,
    SEED_RATING,
};
pub use visibility::{Visibility, VISIBILITY_THRESHOLD};
