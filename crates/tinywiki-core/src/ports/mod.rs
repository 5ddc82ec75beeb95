//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No markup or HTTP types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod page_repository;
pub mod renderer;

use thiserror::Error;

pub use page_repository::PageRepository;
pub use renderer::{RenderError, Renderer, ViewData, views};

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("{0}")]
    NotFound(String),

    /// Storage backend error (database, connection, etc.).
    #[error("{0}")]
    Storage(String),

    /// A constraint was violated (e.g., NOT NULL, unique constraint).
    #[error("{0}")]
    Constraint(String),
}

impl RepositoryError {
    /// Whether this error reports an absent entity.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
