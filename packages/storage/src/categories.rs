// ABOUTME: Category storage layer using SQLite
// ABOUTME: Read-only access to the seeded category table

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use trivia_core::Category;

use crate::repository::CategoryRepository;
use crate::{StorageError, StorageResult};

pub struct CategoryStorage {
    pool: SqlitePool,
}

impl CategoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Category
    fn row_to_category(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Category, StorageError> {
        Ok(Category {
            id: row.try_get("id")?,
            kind: row.try_get("type")?,
        })
    }
}

#[async_trait]
impl CategoryRepository for CategoryStorage {
    async fn list_categories(&self) -> StorageResult<Vec<Category>> {
        debug!("Fetching all categories");

        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(|row| self.row_to_category(row)).collect()
    }

    async fn get_category(&self, id: i64) -> StorageResult<Option<Category>> {
        debug!("Fetching category: {}", id);

        let row = sqlx::query("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| self.row_to_category(&r)).transpose()
    }
}
