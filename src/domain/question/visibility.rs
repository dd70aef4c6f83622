//! Visibility rule: whether a question stays in its role's rotation.

use serde::{Deserialize, Serialize};

/// Average rating a question needs to stay in rotation.
///
/// The comparison is inclusive: exactly 2.0 is visible.
pub const VISIBILITY_THRESHOLD: f64 = 2.0;

/// Whether a question is shown in normal rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Excluded,
}

impl Visibility {
    /// Classifies an average rating against [`VISIBILITY_THRESHOLD`].
    pub fn for_average(average: f64) -> Self {
        if average >= VISIBILITY_THRESHOLD {
            Visibility::Visible
        } else {
            Visibility::Excluded
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Visibility::for_average(2.0), Visibility::Visible);
    }

    #[test]
    fn below_threshold_is_excluded() {
        assert_eq!(Visibility::for_average(1.99), Visibility::Excluded);
        assert_eq!(Visibility::for_average(0.0), Visibility::Excluded);
    }

    #[test]
    fn above_threshold_is_visible() {
        assert!(Visibility::for_average(3.0).is_visible());
        assert!(Visibility::for_average(5.0).is_visible());
    }
}
