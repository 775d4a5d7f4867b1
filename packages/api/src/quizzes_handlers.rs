// ABOUTME: HTTP request handler for quiz play
// ABOUTME: Serves one random question not yet seen, optionally within a category

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use trivia_core::{parse_integer_field, ValidationError};

use crate::response::{ApiError, ApiResult, JsonBody, QuizResponse};
use crate::state::AppState;

/// Category selector sent by the quiz client.
///
/// `{type: "click", id: 0}` means "all categories".
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl QuizCategory {
    /// The category to restrict to, or `None` for all categories
    pub fn category_filter(&self) -> Result<Option<i64>, ValidationError> {
        let id = parse_integer_field(self.id.as_ref(), "quiz_category.id")?;

        if self.kind.as_deref() == Some("click") && id == 0 {
            Ok(None)
        } else {
            Ok(Some(id))
        }
    }
}

/// Request body for fetching the next quiz question
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Pick the next quiz question, or `null` once the candidate set is exhausted
pub async fn next_quiz_question(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<QuizRequest>,
) -> ApiResult<Json<QuizResponse>> {
    let quiz_category = request
        .quiz_category
        .ok_or(ValidationError::MissingField("quiz_category"))?;
    let previous_questions = request
        .previous_questions
        .ok_or(ValidationError::MissingField("previous_questions"))?;
    let category_filter = quiz_category.category_filter()?;

    info!(
        "Fetching quiz question (category: {:?}, previous: {})",
        category_filter,
        previous_questions.len()
    );

    let candidates = state
        .questions
        .quiz_candidates(&previous_questions, category_filter)
        .await
        .map_err(ApiError::unprocessable)?;

    debug!("{} quiz candidates remain", candidates.len());

    let question = state.picker.pick(&candidates).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
