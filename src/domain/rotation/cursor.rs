//! Circular position into a role's rotation.

use serde::{Deserialize, Serialize};

/// Position into a rotation of `len` questions.
///
/// The cursor does not own the sequence; every operation takes the current
/// length so the cursor stays valid while the underlying collection changes.
/// With `len == 0` every operation yields index 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationCursor {
    index: usize,
}

impl RotationCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Creates a cursor at `index`, clamped to `len`.
    pub fn at(index: usize, len: usize) -> Self {
        let mut cursor = Self { index };
        cursor.clamp(len);
        cursor
    }

    /// Raw stored index (not clamped).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the current question, or `None` for an empty rotation.
    pub fn current(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.index.min(len - 1))
        }
    }

    /// Advances one step, wrapping past the end.
    pub fn next(&mut self, len: usize) -> usize {
        if len == 0 {
            self.index = 0;
        } else {
            self.index = (self.index.min(len - 1) + 1) % len;
        }
        self.index
    }

    /// Steps back one, wrapping before the start.
    pub fn previous(&mut self, len: usize) -> usize {
        if len == 0 {
            self.index = 0;
        } else {
            self.index = (self.index.min(len - 1) + len - 1) % len;
        }
        self.index
    }

    /// Pulls the index back inside `0..len` (0 when empty).
    ///
    /// Call after the rotation shrinks, e.g. after deleting the current
    /// question or after a rating drops it below the threshold.
    pub fn clamp(&mut self, len: usize) -> usize {
        self.index = if len == 0 { 0 } else { self.index.min(len - 1) };
        self.index
    }
}
