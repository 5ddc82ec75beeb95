//! Router construction.
//!
//! The router registers no path routes of its own: everything falls through
//! to [`dispatch`], which applies the ordered route table.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::dispatch::dispatch;

/// Create the Axum router for the wiki.
pub fn create_router(ctx: AxumContext) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(ctx))
}
