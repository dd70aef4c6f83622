//! HTTP adapters - REST API for the UI layer.
//!
//! - `questions` - the "all questions" list: filter, sort, add, edit, delete, rate
//! - `rotation` - the one-at-a-time browser for each role
//! - `changes` - Server-Sent Events stream of deck changes
//! - `health` - liveness check

pub mod changes;
pub mod error;
pub mod health;
pub mod questions;
pub mod rotation;

pub use changes::change_routes;
pub use error::ErrorResponse;
pub use health::health_routes;
pub use questions::{question_routes, QuestionHandlers};
pub use rotation::{rotation_routes, RotationHandlers};

use std::sync::Arc;

use axum::Router;

use crate::adapters::events::ChangeFeed;
use crate::application::handlers::RotationSession;
use crate::ports::{EventPublisher, QuestionRepository};

/// Everything the API router needs.
#[derive(Clone)]
pub struct ApiState {
    pub repository: Arc<dyn QuestionRepository>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub change_feed: ChangeFeed,
    pub verbose_errors: bool,
}

/// Builds the full API router (without middleware layers).
pub fn api_router(state: ApiState) -> Router {
    let questions = QuestionHandlers::new(state.repository.clone(), state.event_publisher.clone())
        .with_verbose_errors(state.verbose_errors);
    let session = Arc::new(RotationSession::new(state.repository, state.event_publisher));
    let rotation = RotationHandlers::new(session).with_verbose_errors(state.verbose_errors);

    Router::new()
        .merge(health_routes())
        .nest("/api/questions", question_routes(questions))
        .nest("/api/rotation", rotation_routes(rotation))
        .nest("/api/changes", change_routes(state.change_feed))
}
