//! GetQuestionHandler - Query handler for a single question.

use std::sync::Arc;

use crate::domain::foundation::QuestionId;
use crate::domain::question::{Question, QuestionError};
use crate::ports::QuestionRepository;

/// Query for one question by id.
#[derive(Debug, Clone, Copy)]
pub struct GetQuestionQuery {
    pub question_id: QuestionId,
}

pub struct GetQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl GetQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuestionQuery) -> Result<Question, QuestionError> {
        self.repository
            .find_by_id(query.question_id)
            .await?
            .ok_or_else(|| QuestionError::not_found(query.question_id))
    }
}
