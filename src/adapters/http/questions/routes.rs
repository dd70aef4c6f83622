//! HTTP routes for question endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_question, delete_question, edit_question, get_question, list_questions, rate_question,
    QuestionHandlers,
};

/// Creates the question router with all endpoints.
pub fn question_routes(handlers: QuestionHandlers) -> Router {
    Router::new()
        .route("/", get(list_questions).post(add_question))
        .route(
            "/:id",
            get(get_question).patch(edit_question).delete(delete_question),
        )
        .route("/:id/ratings", post(rate_question))
        .with_state(handlers)
}
