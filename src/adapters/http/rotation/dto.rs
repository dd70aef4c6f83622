//! HTTP DTOs for rotation endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::questions::dto::QuestionResponse;
use crate::application::handlers::{RotationChange, RotationView};
use crate::domain::question::Role;

/// Request carrying new content (edit current, add to role).
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

/// Request to rate the current question.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingRequest {
    pub rating: f64,
}

/// The browsing view: current question plus "position / total".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationViewResponse {
    pub role: Role,
    pub current: Option<QuestionResponse>,
    pub index: usize,
    /// One-based position for display, 0 when the rotation is empty.
    pub position: usize,
    pub total: usize,
}

impl From<RotationView> for RotationViewResponse {
    fn from(view: RotationView) -> Self {
        let position = if view.is_empty() { 0 } else { view.index + 1 };
        Self {
            role: view.role,
            current: view.current.as_ref().map(QuestionResponse::from),
            index: view.index,
            position,
            total: view.total,
        }
    }
}

/// Result of a mutating rotation operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationChangeResponse {
    pub affected: QuestionResponse,
    pub rotation: RotationViewResponse,
}

impl From<RotationChange> for RotationChangeResponse {
    fn from(change: RotationChange) -> Self {
        Self {
            affected: change.affected.into(),
            rotation: change.view.into(),
        }
    }
}
