//! Which browsing flow a question belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The two user roles that each browse their own rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Learner,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 2] = [Role::Mentor, Role::Learner];

    /// Returns the wire/storage string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Mentor => "mentor",
            Role::Learner => "learner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mentor" => Ok(Role::Mentor),
            "learner" => Ok(Role::Learner),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("expected 'mentor' or 'learner', got '{}'", other),
            )),
        }
    }
}
