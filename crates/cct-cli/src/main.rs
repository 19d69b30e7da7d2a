//! cct - collective-agreement diagnostic pipeline CLI.

use cct_cli::commands;
use cct_cli::{Cli, Command, Config};
use clap::Parser;
use tracing::Level;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> cct_cli::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, config).await,
        Command::Schema(args) => commands::execute_schema(args, config),
    }
}
