//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Holds no per-request mutable data; the page service and renderer are
/// safe to call concurrently.
pub type AppState = Arc<AxumContext>;
