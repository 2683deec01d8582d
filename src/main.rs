use clap::Parser;
use pve_report::{Cli, ConnectService, Outcome, report::dispatcher};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit status when credentials are missing or invalid.
const EXIT_CONFIGURATION: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .init();

    // Values already in the environment take precedence over the file.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "could not load .env file");
        }
    }

    let mut stdout = std::io::stdout().lock();
    let result = dispatcher::run(
        &cli,
        || ConnectService::new().execute_from_env(),
        &mut stdout,
    )
    .await;

    match result {
        Ok(Outcome::Completed | Outcome::NoAction) => ExitCode::SUCCESS,
        Ok(Outcome::SetupFailed(_)) => ExitCode::from(EXIT_CONFIGURATION),
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
