//! ListQuestionsHandler - Query handler behind the "all questions" view.

use std::sync::Arc;

use crate::domain::listing::QuestionQuery;
use crate::domain::question::{Question, QuestionError};
use crate::ports::QuestionRepository;

/// Query for a filtered, sorted view of the deck.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsQuery {
    pub query: QuestionQuery,
}

/// Listed questions plus the size of the whole deck.
#[derive(Debug, Clone)]
pub struct QuestionList {
    pub items: Vec<Question>,
    pub total: usize,
}

/// Handler for listing questions.
///
/// The view is derived from the full collection on every call.
pub struct ListQuestionsHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl ListQuestionsHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListQuestionsQuery) -> Result<QuestionList, QuestionError> {
        let all = self.repository.list().await?;
        let total = all.len();
        let items = query.query.apply_owned(all);

        tracing::debug!(
            ?query.query,
            matched = items.len(),
            total,
            "Listed questions"
        );

        Ok(QuestionList { items, total })
    }
}
