//! Question-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId};

use super::Role;

/// Question-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// Question was not found.
    NotFound(QuestionId),
    /// The role's rotation has no current question.
    NothingSelected(Role),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl QuestionError {
    pub fn not_found(id: QuestionId) -> Self {
        QuestionError::NotFound(id)
    }
    pub fn nothing_selected(role: Role) -> Self {
        QuestionError::NothingSelected(role)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuestionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuestionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionError::NotFound(_) => ErrorCode::QuestionNotFound,
            QuestionError::NothingSelected(_) => ErrorCode::QuestionNotFound,
            QuestionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuestionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            QuestionError::NotFound(id) => format!("Question not found: {}", id),
            QuestionError::NothingSelected(role) => {
                format!("No question in the {} rotation", role)
            }
            QuestionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            QuestionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuestionError {}

impl From<DomainError> for QuestionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => QuestionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::QuestionNotFound => match err.details.get("id").and_then(|s| s.parse().ok()) {
                Some(id) => QuestionError::NotFound(id),
                None => QuestionError::Infrastructure(err.to_string()),
            },
            _ => QuestionError::Infrastructure(err.to_string()),
        }
    }
}

impl From<crate::domain::foundation::ValidationError> for QuestionError {
    fn from(err: crate::domain::foundation::ValidationError) -> Self {
        QuestionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_domain_error_keeps_field() {
        let err: QuestionError = DomainError::validation("content", "Content cannot be empty").into();
        assert_eq!(
            err,
            QuestionError::ValidationFailed {
                field: "content".to_string(),
                message: "Content cannot be empty".to_string(),
            }
        );
    }

    #[test]
    fn not_found_domain_error_with_id_maps_to_not_found() {
        let err: QuestionError = DomainError::new(ErrorCode::QuestionNotFound, "gone")
            .with_detail("id", "1003")
            .into();
        assert_eq!(err, QuestionError::NotFound(QuestionId::new(1003)));
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err: QuestionError = DomainError::database("disk full").into();
        assert!(matches!(err, QuestionError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn rating_validation_error_converts() {
        let err: QuestionError = ValidationError::out_of_range("rating", 0.0, 5.0, 9.0).into();
        assert!(matches!(err, QuestionError::ValidationFailed { ref field, .. } if field == "rating"));
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            QuestionError::not_found(QuestionId::new(7)).to_string(),
            "Question not found: 7"
        );
        assert_eq!(
            QuestionError::nothing_selected(Role::Learner).to_string(),
            "No question in the learner rotation"
        );
    }
}
