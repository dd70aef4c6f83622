//! Rotation module - one-at-a-time browsing of a role's visible questions.
//!
//! A role's rotation is its questions at or above the visibility threshold,
//! in collection order. The cursor navigates it circularly.

mod cursor;

pub use cursor::RotationCursor;

use crate::domain::question::{Question, Role};

/// Selects the rotation for `role` from the full collection.
pub fn rotation_for(role: Role, questions: &[Question]) -> Vec<&Question> {
    questions
        .iter()
        .filter(|q| q.role() == role && q.is_in_rotation())
        .collect()
}
