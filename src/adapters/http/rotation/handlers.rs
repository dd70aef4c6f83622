//! HTTP handlers for rotation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_question_error, invalid_path};
use crate::application::handlers::RotationSession;
use crate::domain::question::Role;

use super::dto::{ContentRequest, RatingRequest, RotationChangeResponse, RotationViewResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RotationHandlers {
    session: Arc<RotationSession>,
    verbose_errors: bool,
}

impl RotationHandlers {
    pub fn new(session: Arc<RotationSession>) -> Self {
        Self {
            session,
            verbose_errors: false,
        }
    }

    /// Expose infrastructure error messages in 500 responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

fn parse_role(raw: &str) -> Result<Role, Response> {
    raw.parse::<Role>().map_err(|_| invalid_path("role", raw))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/rotation/:role - Current question
pub async fn current(State(handlers): State<RotationHandlers>, Path(role): Path<String>) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.current(role).await {
        Ok(view) => (StatusCode::OK, Json(RotationViewResponse::from(view))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/rotation/:role/next - Advance
pub async fn next(State(handlers): State<RotationHandlers>, Path(role): Path<String>) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.next(role).await {
        Ok(view) => (StatusCode::OK, Json(RotationViewResponse::from(view))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/rotation/:role/previous - Go back
pub async fn previous(
    State(handlers): State<RotationHandlers>,
    Path(role): Path<String>,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.previous(role).await {
        Ok(view) => (StatusCode::OK, Json(RotationViewResponse::from(view))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/rotation/:role/rating - Rate the current question
pub async fn rate_current(
    State(handlers): State<RotationHandlers>,
    Path(role): Path<String>,
    Json(req): Json<RatingRequest>,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.rate_current(role, req.rating).await {
        Ok(change) => (StatusCode::OK, Json(RotationChangeResponse::from(change))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// PATCH /api/rotation/:role/current - Edit the current question
pub async fn edit_current(
    State(handlers): State<RotationHandlers>,
    Path(role): Path<String>,
    Json(req): Json<ContentRequest>,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.edit_current(role, req.content).await {
        Ok(change) => (StatusCode::OK, Json(RotationChangeResponse::from(change))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// DELETE /api/rotation/:role/current - Delete the current question
pub async fn delete_current(
    State(handlers): State<RotationHandlers>,
    Path(role): Path<String>,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.delete_current(role).await {
        Ok(change) => (StatusCode::OK, Json(RotationChangeResponse::from(change))).into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/rotation/:role/questions - Add a question to this role
pub async fn add(
    State(handlers): State<RotationHandlers>,
    Path(role): Path<String>,
    Json(req): Json<ContentRequest>,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match handlers.session.add(role, req.content).await {
        Ok(change) => {
            (StatusCode::CREATED, Json(RotationChangeResponse::from(change))).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_is_case_insensitive() {
        assert_eq!(parse_role("Mentor").unwrap(), Role::Mentor);
    }

    #[test]
    fn unknown_role_maps_to_400() {
        let response = parse_role("coach").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
