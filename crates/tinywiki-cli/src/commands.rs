//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;
use tinywiki_axum::bootstrap::{DEFAULT_HOST, DEFAULT_PORT};

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the wiki web server
    Serve {
        /// Address to bind
        #[arg(long, env = "TINYWIKI_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "TINYWIKI_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Path to the SQLite database (defaults to the data directory)
        #[arg(long = "db", env = "TINYWIKI_DB")]
        database: Option<PathBuf>,
    },

    /// Show the resolved data and database paths
    Paths,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;

    #[test]
    fn test_serve_without_flags() {
        let cli = Cli::parse_from(["tinywiki", "serve"]);
        assert!(matches!(cli.command, Some(Commands::Serve { .. })));
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from([
            "tinywiki",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9001",
            "--db",
            "/tmp/wiki.db",
        ]);
        assert_eq!(
            cli.command,
            Some(Commands::Serve {
                host: "127.0.0.1".into(),
                port: 9001,
                database: Some(PathBuf::from("/tmp/wiki.db")),
            })
        );
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["tinywiki", "serve", "--port", "http"]).is_err());
    }
}
