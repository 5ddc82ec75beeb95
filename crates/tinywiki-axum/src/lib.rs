//! Axum web adapter for tinywiki.
//!
//! Every request lands on a single fallback handler, [`dispatch::dispatch`],
//! which matches the path against a fixed, ordered route table and hands a
//! string parameter to one of the page handlers. Handlers call the core
//! `PageService` and the `Renderer` port; failures become a plain-text
//! status response.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; these are exercised by tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, ServerConfig, bootstrap, start_server};
pub use dispatch::{Action, Dispatch, resolve};
pub use error::HttpError;
pub use render::HtmlRenderer;
pub use routes::create_router;
pub use state::AppState;
