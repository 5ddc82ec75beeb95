//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the tinywiki server.
#[derive(Parser)]
#[command(name = "tinywiki")]
#[command(about = "Serve a minimal wiki backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub const fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "tinywiki=debug,tinywiki_core=debug,tinywiki_db=debug,tinywiki_axum=debug,tower_http=debug,info"
        } else {
            "info"
        }
    }
}
