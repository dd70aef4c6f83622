//! HTTP adapter for the "all questions" list view.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::QuestionHandlers;
pub use routes::question_routes;
