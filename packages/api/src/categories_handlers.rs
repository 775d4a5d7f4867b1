// ABOUTME: HTTP request handlers for category operations
// ABOUTME: Category listing and per-category question pages

use axum::{
    extract::State,
    Json,
};
use tracing::info;

use crate::pagination::{paginate, PageQuery};
use crate::response::{
    format_categories, ApiError, ApiResult, CategoriesResponse, PathParam, QueryParam,
    QuestionPageResponse,
};
use crate::state::AppState;

/// List all categories as an id to label mapping
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    info!("Listing categories");

    let categories = state.categories.list_categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: format_categories(categories),
    }))
}

/// Questions in one category, paginated
pub async fn list_category_questions(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<i64>,
    QueryParam(params): QueryParam<PageQuery>,
) -> ApiResult<Json<QuestionPageResponse>> {
    info!(
        "Listing questions for category: {} (page: {})",
        category_id,
        params.page()
    );

    let category = state
        .categories
        .get_category(category_id)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or(ApiError::NotFound)?;

    let questions = state
        .questions
        .questions_by_category(category_id)
        .await
        .map_err(ApiError::unprocessable)?;
    let total_questions = questions.len();

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: paginate(questions, params.page()),
        total_questions,
        current_category: Some(category.kind),
    }))
}
