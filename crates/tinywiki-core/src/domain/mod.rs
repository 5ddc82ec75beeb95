//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, templates, HTTP).

mod page;

pub use page::{NewPage, PLACEHOLDER_TITLE, Page};
