//! Read models returned by rotation operations.

use crate::domain::question::{Question, Role};

/// What the one-at-a-time browser shows: the current question and "n / total".
#[derive(Debug, Clone, PartialEq)]
pub struct RotationView {
    pub role: Role,
    /// `None` when the rotation is empty.
    pub current: Option<Question>,
    /// Zero-based cursor position (0 when empty).
    pub index: usize,
    /// Number of questions in the rotation.
    pub total: usize,
}

impl RotationView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Result of a mutating rotation operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationChange {
    /// The question that was rated, edited, deleted or added, as it is now
    /// (or as it was just before deletion).
    pub affected: Question,
    /// The rotation after the change.
    pub view: RotationView,
}
