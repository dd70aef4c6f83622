//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Lowest identifier ever handed out by the allocator.
pub const FIRST_QUESTION_ID: i64 = 1000;

/// Unique identifier for a question within the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    /// Creates a QuestionId from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the id that follows the highest of `existing`.
    ///
    /// Never returns anything below [`FIRST_QUESTION_ID`], so allocation
    /// cannot collide with an id already in the collection.
    pub fn next_after<'a>(existing: impl IntoIterator<Item = &'a QuestionId>) -> Self {
        let next = existing
            .into_iter()
            .map(|id| id.0 + 1)
            .max()
            .unwrap_or(FIRST_QUESTION_ID);
        Self(next.max(FIRST_QUESTION_ID))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
