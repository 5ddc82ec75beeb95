//! Renderer port definition.
//!
//! Produces a response body from a named view and a data value. The core
//! only calls this port; markup lives in the adapter that implements it.

use thiserror::Error;

use crate::domain::Page;

/// View names understood by every renderer.
pub mod views {
    pub const VIEW: &str = "view";
    pub const EDIT: &str = "edit";
    pub const ADD: &str = "add";
    pub const HOME: &str = "home";
}

/// Data handed to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewData {
    /// A single page (view, edit, add).
    Page(Page),
    /// Page summaries (home).
    Summaries(Vec<Page>),
}

/// Errors raised while rendering a view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("view {view} expects {expected}")]
    DataMismatch { view: String, expected: &'static str },

    #[error("render failed: {0}")]
    Failed(String),
}

/// Port for turning a view name plus data into a response body.
pub trait Renderer: Send + Sync {
    /// Render `view` with `data`.
    fn render(&self, view: &str, data: &ViewData) -> Result<String, RenderError>;
}
