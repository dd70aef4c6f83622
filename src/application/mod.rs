//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers stage a change, commit it best-effort, then announce it;
//! query handlers derive views from the full collection.

pub mod handlers;

pub use handlers::{
    // Question handlers
    AddQuestionCommand, AddQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    EditQuestionCommand, EditQuestionHandler, GetQuestionHandler, GetQuestionQuery,
    ListQuestionsHandler, ListQuestionsQuery, QuestionList, RateQuestionCommand,
    RateQuestionHandler, SeedDefaultsCommand, SeedDefaultsHandler, SeedOutcome,
    // Rotation
    RotationChange, RotationSession, RotationView,
};
