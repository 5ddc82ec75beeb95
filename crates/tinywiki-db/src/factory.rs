//! Composition utilities for wiring the page service to `SQLite`.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use tinywiki_core::{PageRepository, PageService};

use crate::repositories::SqlitePageRepository;

/// Factory for creating repository and service instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a page repository from a pool.
    pub fn page_repository(pool: SqlitePool) -> Arc<SqlitePageRepository> {
        Arc::new(SqlitePageRepository::new(pool))
    }

    /// Build a `PageService` backed by `SQLite`.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repo = CoreFactory::page_repository(pool);
    /// let service = PageService::new(repo);
    /// ```
    pub fn build_page_service(pool: SqlitePool) -> PageService {
        let repo: Arc<dyn PageRepository> = Self::page_repository(pool);
        PageService::new(repo)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a page repository using this test database.
    pub fn page_repository(&self) -> SqlitePageRepository {
        SqlitePageRepository::new(self.pool.clone())
    }

    /// Create a page service using this test database.
    pub fn page_service(&self) -> PageService {
        CoreFactory::build_page_service(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_page_service_round_trip_over_sqlite() {
        let db = TestDb::new().await.unwrap();
        let service = db.page_service();

        let id = service.insert("new_title", "new_body").await.unwrap();
        let page = service.load_page(id).await.unwrap();

        assert_eq!(page.title, "new_title");
        assert_eq!(page.body, "new_body");
    }
}
