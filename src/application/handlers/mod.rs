//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `question` - add, edit, delete, rate, list, get, seed
//! - `rotation` - per-role browsing session built on the question handlers

mod best_effort;
pub mod question;
pub mod rotation;

pub use question::{
    AddQuestionCommand, AddQuestionHandler, AddQuestionResult, DeleteQuestionCommand,
    DeleteQuestionHandler, DeleteQuestionResult, EditQuestionCommand, EditQuestionHandler,
    EditQuestionResult, GetQuestionHandler, GetQuestionQuery, ListQuestionsHandler,
    ListQuestionsQuery, QuestionList, RateQuestionCommand, RateQuestionHandler,
    RateQuestionResult, SeedDefaultsCommand, SeedDefaultsHandler, SeedOutcome, DEFAULT_DECK,
};
pub use rotation::{RotationChange, RotationSession, RotationView};
