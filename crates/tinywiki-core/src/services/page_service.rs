//! Page service - thin orchestrator for page lifecycle operations.
//!
//! Every call is a fresh pass-through to the `PageRepository` port. There is
//! no caching, no retrying and no read-before-write; the service exists so
//! handlers never depend on a concrete storage technology.

use std::sync::Arc;

use crate::domain::{NewPage, Page};
use crate::ports::{PageRepository, RepositoryError};

/// Service for loading, creating and updating pages.
#[derive(Clone)]
pub struct PageService {
    repo: Arc<dyn PageRepository>,
}

impl PageService {
    /// Create a new page service.
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }

    /// Load one full page.
    ///
    /// Fails with `RepositoryError::NotFound` when the backend reports absence.
    pub async fn load_page(&self, id: i64) -> Result<Page, RepositoryError> {
        self.repo.get_by_id(id).await
    }

    /// Load summaries of every page for the listing.
    pub async fn load_summaries(&self) -> Result<Vec<Page>, RepositoryError> {
        self.repo.list_summaries().await
    }

    /// Create a page and return its backend-assigned id.
    ///
    /// Empty fields are forwarded as-is; rejecting them is the caller's job.
    pub async fn insert(&self, title: &str, body: &str) -> Result<i64, RepositoryError> {
        let id = self.repo.create(&NewPage::new(title, body)).await?;
        tracing::debug!(page_id = id, "Inserted page");
        Ok(id)
    }

    /// Overwrite an existing page.
    ///
    /// Whatever the port reports for a missing id is returned unchanged.
    pub async fn update(&self, id: i64, title: &str, body: &str) -> Result<(), RepositoryError> {
        let page = Page {
            id,
            title: title.to_string(),
            body: body.to_string(),
        };
        self.repo.update(&page).await?;
        tracing::debug!(page_id = id, "Updated page");
        Ok(())
    }

    /// Delete a page.
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.repo.delete(id).await?;
        tracing::debug!(page_id = id, "Deleted page");
        Ok(())
    }
}
