//! CLI entry point - the composition root.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinywiki_cli::{Cli, Commands, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            host,
            port,
            database,
        } => {
            handlers::serve::execute(host, port, database).await?;
        }
        Commands::Paths => {
            handlers::paths::execute()?;
        }
    }

    Ok(())
}
