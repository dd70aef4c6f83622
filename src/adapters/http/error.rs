//! Error bodies and the mapping from application errors to HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::question::QuestionError;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// 400 response for a path segment that does not parse.
pub fn invalid_path(what: &str, raw: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {}: {}", what, raw))),
    )
        .into_response()
}

/// Maps a `QuestionError` to a response.
///
/// Infrastructure messages are only exposed when `verbose` is set.
pub fn handle_question_error(error: QuestionError, verbose: bool) -> Response {
    match error {
        QuestionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Question", &id.to_string())),
        )
            .into_response(),
        QuestionError::NothingSelected(role) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Current question for role", role.as_str())),
        )
            .into_response(),
        QuestionError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        QuestionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Request failed");
            let message = if verbose {
                msg
            } else {
                "Internal server error".to_string()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(message)),
            )
                .into_response()
        }
    }
}
