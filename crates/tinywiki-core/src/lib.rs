//! Core domain and ports for tinywiki.
//!
//! This crate holds the `Page` entity, the persistence and rendering port
//! traits, and the `PageService` that orchestrates between them. It has no
//! knowledge of SQL, HTTP or HTML; adapters live in sibling crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewPage, PLACEHOLDER_TITLE, Page};
pub use paths::{PathError, data_root, database_path, database_path_in};
pub use ports::{PageRepository, RenderError, Renderer, RepositoryError, ViewData, views};
pub use services::PageService;
