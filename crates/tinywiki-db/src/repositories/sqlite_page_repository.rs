//! `SQLite` implementation of the `PageRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use tinywiki_core::{NewPage, Page, PageRepository, RepositoryError};

use super::row_mappers::{row_to_page, row_to_summary, storage_error};

/// `SQLite` implementation of the `PageRepository` trait.
///
/// Holds a connection pool; sqlx serializes access per connection so the
/// repository can be shared across concurrent requests.
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    /// Create a new `SQLite` page repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PageRepository for SqlitePageRepository {
    async fn list_summaries(&self) -> Result<Vec<Page>, RepositoryError> {
        let rows = sqlx::query("SELECT id, title FROM pages ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("error in select operation", &e))?;

        Ok(rows.iter().map(row_to_summary).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Page, RepositoryError> {
        let row = sqlx::query("SELECT id, title, body FROM pages WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error(&format!("pageId {id}"), &e))?;

        row.as_ref()
            .map(row_to_page)
            .ok_or_else(|| RepositoryError::NotFound(format!("pageId {id}: not found")))
    }

    async fn create(&self, page: &NewPage) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO pages (title, body) VALUES (?, ?)")
            .bind(&page.title)
            .bind(&page.body)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("addPage", &e))?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, page: &Page) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE pages SET title = ?, body = ? WHERE id = ?")
            .bind(&page.title)
            .bind(&page.body)
            .bind(page.id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("updatePage", &e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "updatePage: pageId {} not found",
                page.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("deletePage", &e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "deletePage: pageId {id} not found"
            )));
        }

        Ok(())
    }
}
