// ABOUTME: Question storage layer using SQLite
// ABOUTME: Insert, delete, search, category filtering, and quiz candidate queries

use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use trivia_core::{Question, QuestionCreateInput};

use crate::repository::QuestionRepository;
use crate::{StorageError, StorageResult};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QuestionStorage {
    pool: SqlitePool,
}

impl QuestionStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Question
    fn row_to_question(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Question, StorageError> {
        Ok(Question {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
            category: row.try_get("category")?,
            difficulty: row.try_get("difficulty")?,
        })
    }

    fn rows_to_questions(
        &self,
        rows: &[sqlx::sqlite::SqliteRow],
    ) -> Result<Vec<Question>, StorageError> {
        rows.iter().map(|row| self.row_to_question(row)).collect()
    }
}

#[async_trait]
impl QuestionRepository for QuestionStorage {
    async fn list_questions(&self) -> StorageResult<Vec<Question>> {
        debug!("Fetching all questions");

        let query = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        self.rows_to_questions(&rows)
    }

    async fn get_question(&self, id: i64) -> StorageResult<Option<Question>> {
        debug!("Fetching question: {}", id);

        let query = format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| self.row_to_question(&r)).transpose()
    }

    async fn count_questions(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_question(&self, input: QuestionCreateInput) -> StorageResult<Question> {
        debug!(
            "Creating question (category: {}, difficulty: {})",
            input.category, input.difficulty
        );

        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&input.question)
        .bind(&input.answer)
        .bind(input.category)
        .bind(input.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(Question {
            id: result.last_insert_rowid(),
            question: input.question,
            answer: input.answer,
            category: input.category,
            difficulty: input.difficulty,
        })
    }

    async fn delete_question(&self, id: i64) -> StorageResult<bool> {
        debug!("Deleting question: {}", id);

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &str) -> StorageResult<Vec<Question>> {
        debug!("Searching questions for: {:?}", term);

        // SQLite lower() folds ASCII only, so case folding happens here
        let needle = term.to_lowercase();
        let mut questions = self.list_questions().await?;
        questions.retain(|q| q.question.to_lowercase().contains(&needle));

        Ok(questions)
    }

    async fn questions_by_category(&self, category_id: i64) -> StorageResult<Vec<Question>> {
        debug!("Fetching questions for category: {}", category_id);

        let query = format!(
            "SELECT {} FROM questions WHERE category = ? ORDER BY id",
            QUESTION_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        self.rows_to_questions(&rows)
    }

    async fn quiz_candidates(
        &self,
        exclude_ids: &[i64],
        category_id: Option<i64>,
    ) -> StorageResult<Vec<Question>> {
        let excluded: BTreeSet<i64> = exclude_ids.iter().copied().collect();

        debug!(
            "Fetching quiz candidates (category: {:?}, excluded: {})",
            category_id,
            excluded.len()
        );

        // Exclusions are applied in memory; the id set has no bind-variable limit
        let mut questions = match category_id {
            Some(category_id) => self.questions_by_category(category_id).await?,
            None => self.list_questions().await?,
        };
        questions.retain(|q| !excluded.contains(&q.id));

        Ok(questions)
    }
}
