//! Page repository trait definition.
//!
//! This port defines the interface for page persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewPage, Page};

/// Repository for page persistence operations.
///
/// Implementations are shared across concurrent requests and must be safe
/// to call from many tasks at once; they own their own connection pooling.
/// They do not re-validate page content.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, create, update, delete
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// List every page as a summary (id and title; body may be empty).
    ///
    /// No ordering is guaranteed to callers.
    async fn list_summaries(&self) -> Result<Vec<Page>, RepositoryError>;

    /// Get a full page by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the page doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Page, RepositoryError>;

    /// Insert a new page and return the id assigned by the backend.
    async fn create(&self, page: &NewPage) -> Result<i64, RepositoryError>;

    /// Overwrite title and body of an existing page.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the page doesn't exist.
    async fn update(&self, page: &Page) -> Result<(), RepositoryError>;

    /// Delete a page by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the page doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
