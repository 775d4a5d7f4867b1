// ABOUTME: Shared application state injected into handlers
// ABOUTME: Holds the category and question repositories plus the quiz picker

use std::sync::Arc;

use sqlx::SqlitePool;
use trivia_storage::{CategoryRepository, CategoryStorage, QuestionRepository, QuestionStorage};

use crate::picker::{QuestionPicker, RandomPicker};

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub picker: Arc<dyn QuestionPicker>,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
        picker: Arc<dyn QuestionPicker>,
    ) -> Self {
        Self {
            categories,
            questions,
            picker,
        }
    }

    /// SQLite-backed stores with uniform random quiz selection
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self::new(
            Arc::new(CategoryStorage::new(pool.clone())),
            Arc::new(QuestionStorage::new(pool)),
            Arc::new(RandomPicker),
        )
    }

    /// Replace the quiz picker
    pub fn with_picker(mut self, picker: Arc<dyn QuestionPicker>) -> Self {
        self.picker = picker;
        self
    }
}
