//! In-memory adapters for tests and ephemeral runs.

mod question_repository;

pub use question_repository::InMemoryQuestionRepository;
