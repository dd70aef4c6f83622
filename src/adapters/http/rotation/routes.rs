//! HTTP routes for rotation endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    add, current, delete_current, edit_current, next, previous, rate_current, RotationHandlers,
};

/// Creates the rotation router with all endpoints.
pub fn rotation_routes(handlers: RotationHandlers) -> Router {
    Router::new()
        .route("/:role", get(current))
        .route("/:role/next", post(next))
        .route("/:role/previous", post(previous))
        .route("/:role/rating", post(rate_current))
        .route("/:role/current", patch(edit_current).delete(delete_current))
        .route("/:role/questions", post(add))
        .with_state(handlers)
}
