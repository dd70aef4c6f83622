//! HTTP DTOs for question endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::QuestionList;
use crate::domain::listing::{QuestionQuery, RoleFilter, SortOrder, VisibilityFilter};
use crate::domain::question::{Question, Role, Visibility};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to add a question.
#[derive(Debug, Clone, Deserialize)]
pub struct AddQuestionRequest {
    pub role: Role,
    pub content: String,
}

/// Request to edit a question's content.
#[derive(Debug, Clone, Deserialize)]
pub struct EditQuestionRequest {
    pub content: String,
}

/// Request to rate a question (0 to 5 stars).
#[derive(Debug, Clone, Deserialize)]
pub struct RateQuestionRequest {
    pub rating: f64,
}

/// Query parameters for listing questions. Missing selectors take defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuestionsParams {
    #[serde(default)]
    pub role: RoleFilter,
    #[serde(default)]
    pub visibility: VisibilityFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl From<ListQuestionsParams> for QuestionQuery {
    fn from(params: ListQuestionsParams) -> Self {
        QuestionQuery::new(params.role, params.visibility, params.sort)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question with its derived values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionResponse {
    pub id: i64,
    pub role: Role,
    pub content: String,
    pub rating_history: Vec<f64>,
    pub average_rating: f64,
    pub rating_count: usize,
    pub visibility: Visibility,
    pub date_added: String,
    pub is_default: bool,
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            role: question.role(),
            content: question.content().to_string(),
            rating_history: question.rating_history().iter().map(|r| r.value()).collect(),
            average_rating: question.average_rating(),
            rating_count: question.rating_count(),
            visibility: question.visibility(),
            date_added: question.date_added().as_datetime().to_rfc3339(),
            is_default: question.is_default(),
        }
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self::from(&question)
    }
}

/// Filtered list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub items: Vec<QuestionResponse>,
    /// Number of items that matched the selectors.
    pub count: usize,
    /// Size of the whole deck.
    pub total: usize,
}

impl From<QuestionList> for QuestionListResponse {
    fn from(list: QuestionList) -> Self {
        let items: Vec<QuestionResponse> = list.items.iter().map(QuestionResponse::from).collect();
        Self {
            count: items.len(),
            items,
            total: list.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuestionId, Rating, Timestamp};

    #[test]
    fn question_response_carries_derived_values() {
        let question = Question::reconstitute(
            QuestionId::new(1000),
            Role::Mentor,
            "Why?".to_string(),
            vec![Rating::new(3.0).unwrap(), Rating::new(1.0).unwrap()],
            Timestamp::now(),
            true,
        );

        let response = QuestionResponse::from(&question);

        assert_eq!(response.id, 1000);
        assert_eq!(response.average_rating, 2.0);
        assert_eq!(response.visibility, Visibility::Visible);
        assert_eq!(response.rating_history, vec![3.0, 1.0]);
    }

    #[test]
    fn list_params_default_to_all_all_date_descending() {
        let params: ListQuestionsParams = serde_json::from_str("{}").unwrap();
        assert_eq!(QuestionQuery::from(params), QuestionQuery::default());
    }

    #[test]
    fn list_params_parse_snake_case_values() {
        let params: ListQuestionsParams = serde_json::from_str(
            r#"{"role":"learner","visibility":"excluded","sort":"rating_ascending"}"#,
        )
        .unwrap();
        assert_eq!(params.role, RoleFilter::Learner);
        assert_eq!(params.visibility, VisibilityFilter::Excluded);
        assert_eq!(params.sort, SortOrder::RatingAscending);
    }
}
