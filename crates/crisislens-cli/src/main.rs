//! CLI entry point - the composition root.

use clap::Parser;

use crisislens_cli::{Cli, CliError, Commands, handlers, logging};
use crisislens_core::RawSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli).await {
        // Analysis failures were already rendered in the result area
        if !matches!(err, CliError::Analysis(_)) {
            eprintln!("error: {err}");
        }
        tracing::debug!(error = %err, code = err.exit_code(), "command failed");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Validation waits until each command has merged its flags
    let raw = RawSettings::from_env();
    tracing::debug!(?raw, "environment settings read");

    match cli.command {
        Commands::Serve(args) => handlers::serve::execute(raw, args).await,
        Commands::Analyze(args) => handlers::analyze::execute(raw, args).await,
    }
}
