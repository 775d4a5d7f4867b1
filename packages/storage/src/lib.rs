// ABOUTME: Data layer and persistence for the trivia API
// ABOUTME: SQLite pool bootstrap plus category and question stores behind repository traits

use thiserror::Error;

pub mod categories;
pub mod db;
pub mod questions;
pub mod repository;

pub use categories::CategoryStorage;
pub use db::{init_memory_pool, init_pool};
pub use questions::QuestionStorage;
pub use repository::{CategoryRepository, QuestionRepository};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
