// ABOUTME: HTTP request handlers for question operations
// ABOUTME: Listing, creation, deletion, and substring search

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;
use tracing::info;
use trivia_core::{validate_question_draft, QuestionDraft, ValidationError};

use crate::pagination::{paginate, PageQuery};
use crate::response::{
    format_categories, ApiError, ApiResult, DeletedResponse, JsonBody, MessageResponse, PathParam,
    QueryParam, QuestionListResponse, QuestionPageResponse,
};
use crate::state::AppState;

/// List all questions, paginated, with the category mapping
pub async fn list_questions(
    State(state): State<AppState>,
    QueryParam(params): QueryParam<PageQuery>,
) -> ApiResult<Json<QuestionListResponse>> {
    info!("Listing questions (page: {})", params.page());

    let questions = state
        .questions
        .list_questions()
        .await
        .map_err(ApiError::unprocessable)?;
    let categories = state
        .categories
        .list_categories()
        .await
        .map_err(ApiError::unprocessable)?;
    let total_questions = questions.len();

    Ok(Json(QuestionListResponse {
        success: true,
        questions: paginate(questions, params.page()),
        total_questions,
        categories: format_categories(categories),
        current_category: None,
    }))
}

/// Create a new question; all four fields are required
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<QuestionDraft>,
) -> ApiResult<Json<MessageResponse>> {
    let input = validate_question_draft(&draft)?;

    info!(
        "Creating question (category: {}, difficulty: {})",
        input.category, input.difficulty
    );

    let question = state
        .questions
        .insert_question(input)
        .await
        .map_err(ApiError::unprocessable)?;

    info!("Created question: {}", question.id);

    Ok(Json(MessageResponse {
        success: true,
        message: "Question added successfully",
    }))
}

/// Delete a question by id
pub async fn delete_question(
    State(state): State<AppState>,
    PathParam(question_id): PathParam<i64>,
) -> ApiResult<Json<DeletedResponse>> {
    info!("Deleting question: {}", question_id);

    let deleted = state
        .questions
        .delete_question(question_id)
        .await
        .map_err(ApiError::unprocessable)?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// Request body for searching questions
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Case-insensitive substring search over question text
pub async fn search_questions(
    State(state): State<AppState>,
    QueryParam(params): QueryParam<PageQuery>,
    JsonBody(request): JsonBody<SearchRequest>,
) -> ApiResult<Json<QuestionPageResponse>> {
    let term = request
        .search_term
        .ok_or(ValidationError::MissingField("searchTerm"))?;

    info!("Searching questions for {:?} (page: {})", term, params.page());

    let questions = state
        .questions
        .search_questions(&term)
        .await
        .map_err(ApiError::unprocessable)?;
    let total_questions = questions.len();

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: paginate(questions, params.page()),
        total_questions,
        current_category: None,
    }))
}
