// ABOUTME: Repository traits for categories and questions
// ABOUTME: Handlers depend on these seams so stores can be injected and swapped

use async_trait::async_trait;
use trivia_core::{Category, Question, QuestionCreateInput};

use crate::StorageResult;

/// Read-only access to the seeded category table
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in id order
    async fn list_categories(&self) -> StorageResult<Vec<Category>>;

    async fn get_category(&self, id: i64) -> StorageResult<Option<Category>>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions in id order
    async fn list_questions(&self) -> StorageResult<Vec<Question>>;

    async fn get_question(&self, id: i64) -> StorageResult<Option<Question>>;

    async fn count_questions(&self) -> StorageResult<i64>;

    async fn insert_question(&self, input: QuestionCreateInput) -> StorageResult<Question>;

    /// Remove a question, returning whether a record existed
    async fn delete_question(&self, id: i64) -> StorageResult<bool>;

    /// Case-insensitive substring match on the question text
    async fn search_questions(&self, term: &str) -> StorageResult<Vec<Question>>;

    async fn questions_by_category(&self, category_id: i64) -> StorageResult<Vec<Question>>;

    /// Questions not in `exclude_ids`, optionally limited to one category
    async fn quiz_candidates(
        &self,
        exclude_ids: &[i64],
        category_id: Option<i64>,
    ) -> StorageResult<Vec<Question>>;
}
