//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here
//! and passed down explicitly; nothing is held in globals.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tinywiki_core::{PageService, Renderer};
use tinywiki_db::{CoreFactory, setup_database};

use crate::render::HtmlRenderer;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default listening address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` page database.
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the page service and renderer shared by every request.
pub struct AxumContext {
    /// Page lifecycle service.
    pub pages: PageService,
    /// View renderer.
    pub renderer: Arc<dyn Renderer>,
}

impl AxumContext {
    pub fn new(pages: PageService, renderer: Arc<dyn Renderer>) -> Self {
        Self { pages, renderer }
    }
}

/// Bootstrap the server context: database pool, page service, renderer.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "tinywiki.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let pages = CoreFactory::build_page_service(pool);

    Ok(AxumContext::new(pages, Arc::new(HtmlRenderer::new())))
}

/// Start the web server and serve until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("tinywiki listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("tinywiki stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
