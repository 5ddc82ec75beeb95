//! HTTP request handlers for the page routes.
//!
//! Each handler parses its string parameter, calls the `PageService`, and
//! either renders a view or redirects. Any failure short-circuits into an
//! `HttpError`; nothing is partially rendered.

pub mod form;
pub mod pages;
