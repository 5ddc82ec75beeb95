//! `SQLite` persistence for tinywiki.
//!
//! Implements the core `PageRepository` port on top of an sqlx connection
//! pool. The pool never leaks through the port signatures; adapters obtain
//! repositories and services through [`CoreFactory`].

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqlitePageRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// Linked for its bundled SQLite build; sqlx picks it up transitively.
use libsqlite3_sys as _;
