//! HTTP handlers for question endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_question_error, invalid_path};
use crate::application::handlers::{
    AddQuestionCommand, AddQuestionHandler, DeleteQuestionCommand, DeleteQuestionHandler,
    EditQuestionCommand, EditQuestionHandler, GetQuestionHandler, GetQuestionQuery,
    ListQuestionsHandler, ListQuestionsQuery, RateQuestionCommand, RateQuestionHandler,
};
use crate::domain::foundation::QuestionId;
use crate::ports::{EventPublisher, QuestionRepository};

use super::dto::{
    AddQuestionRequest, EditQuestionRequest, ListQuestionsParams, QuestionListResponse,
    QuestionResponse, RateQuestionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuestionHandlers {
    add_handler: Arc<AddQuestionHandler>,
    edit_handler: Arc<EditQuestionHandler>,
    delete_handler: Arc<DeleteQuestionHandler>,
    rate_handler: Arc<RateQuestionHandler>,
    list_handler: Arc<ListQuestionsHandler>,
    get_handler: Arc<GetQuestionHandler>,
    verbose_errors: bool,
}

impl QuestionHandlers {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            add_handler: Arc::new(AddQuestionHandler::new(
                repository.clone(),
                event_publisher.clone(),
            )),
            edit_handler: Arc::new(EditQuestionHandler::new(
                repository.clone(),
                event_publisher.clone(),
            )),
            delete_handler: Arc::new(DeleteQuestionHandler::new(
                repository.clone(),
                event_publisher.clone(),
            )),
            rate_handler: Arc::new(RateQuestionHandler::new(repository.clone(), event_publisher)),
            list_handler: Arc::new(ListQuestionsHandler::new(repository.clone())),
            get_handler: Arc::new(GetQuestionHandler::new(repository)),
            verbose_errors: false,
        }
    }

    /// Expose infrastructure error messages in 500 responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

fn parse_id(raw: &str) -> Result<QuestionId, Response> {
    raw.parse::<QuestionId>()
        .map_err(|_| invalid_path("question ID", raw))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/questions - Filtered, sorted list
pub async fn list_questions(
    State(handlers): State<QuestionHandlers>,
    Query(params): Query<ListQuestionsParams>,
) -> Response {
    let query = ListQuestionsQuery {
        query: params.into(),
    };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            let response: QuestionListResponse = list.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/questions - Add a question
pub async fn add_question(
    State(handlers): State<QuestionHandlers>,
    Json(req): Json<AddQuestionRequest>,
) -> Response {
    let cmd = AddQuestionCommand {
        role: req.role,
        content: req.content,
    };

    match handlers.add_handler.handle(cmd).await {
        Ok(result) => {
            let response: QuestionResponse = result.question.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// GET /api/questions/:id - Get one question
pub async fn get_question(
    State(handlers): State<QuestionHandlers>,
    Path(question_id): Path<String>,
) -> Response {
    let question_id = match parse_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetQuestionQuery { question_id }).await {
        Ok(question) => {
            let response: QuestionResponse = question.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// PATCH /api/questions/:id - Edit content
pub async fn edit_question(
    State(handlers): State<QuestionHandlers>,
    Path(question_id): Path<String>,
    Json(req): Json<EditQuestionRequest>,
) -> Response {
    let question_id = match parse_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EditQuestionCommand {
        question_id,
        content: req.content,
    };

    match handlers.edit_handler.handle(cmd).await {
        Ok(result) => {
            let response: QuestionResponse = result.question.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// DELETE /api/questions/:id - Delete permanently
pub async fn delete_question(
    State(handlers): State<QuestionHandlers>,
    Path(question_id): Path<String>,
) -> Response {
    let question_id = match parse_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteQuestionCommand { question_id })
        .await
    {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}

/// POST /api/questions/:id/ratings - Append a rating
pub async fn rate_question(
    State(handlers): State<QuestionHandlers>,
    Path(question_id): Path<String>,
    Json(req): Json<RateQuestionRequest>,
) -> Response {
    let question_id = match parse_id(&question_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RateQuestionCommand {
        question_id,
        rating: req.rating,
    };

    match handlers.rate_handler.handle(cmd).await {
        Ok(result) => {
            let response: QuestionResponse = result.question.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_question_error(e, handlers.verbose_errors),
    }
}
