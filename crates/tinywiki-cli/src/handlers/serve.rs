//! Serve command handler.

use std::path::PathBuf;

use anyhow::Result;
use tinywiki_axum::{ServerConfig, start_server};

/// Build the server config from command-line values.
///
/// Falls back to the default database location when `database` is unset.
pub fn build_config(host: String, port: u16, database: Option<PathBuf>) -> Result<ServerConfig> {
    let database_path = match database {
        Some(path) => path,
        None => tinywiki_core::database_path()?,
    };
    Ok(ServerConfig {
        host,
        port,
        database_path,
    })
}

/// Execute the serve command.
pub async fn execute(host: String, port: u16, database: Option<PathBuf>) -> Result<()> {
    let config = build_config(host, port, database)?;
    tracing::info!(
        addr = %config.bind_addr(),
        database_path = %config.database_path.display(),
        "Starting tinywiki"
    );
    start_server(config).await
}
