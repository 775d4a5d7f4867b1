// ABOUTME: HTTP API layer for the trivia game providing REST endpoints and routing
// ABOUTME: Composes the stores, pagination, and error envelope into an axum router

use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod categories_handlers;
pub mod pagination;
pub mod picker;
pub mod questions_handlers;
pub mod quizzes_handlers;
pub mod response;
pub mod state;

pub use picker::{QuestionPicker, RandomPicker};
pub use response::{ApiError, ApiResult};
pub use state::AppState;

/// Path prefix under which the routes are also mounted
pub const API_PREFIX: &str = "/api";

/// Creates the trivia routes without state
pub fn create_trivia_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories_handlers::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(categories_handlers::list_category_questions),
        )
        .route("/questions", get(questions_handlers::list_questions))
        .route("/questions", post(questions_handlers::create_question))
        .route("/questions/search", post(questions_handlers::search_questions))
        .route(
            "/questions/{question_id}",
            delete(questions_handlers::delete_question),
        )
        .route("/quizzes", post(quizzes_handlers::next_quiz_question))
}

/// Creates the full router, served both at the root and under `/api`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_trivia_routes())
        .nest(API_PREFIX, create_trivia_routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
