//! Recsift CLI binary.

use std::io;
use std::process::ExitCode;

use recsift::cli::Cli;
use recsift::output::{OutputConfig, print_error};
use tracing_subscriber::EnvFilter;

/// Main entry point for the recsift CLI.
///
/// Uses tokio's current_thread runtime: the run is a short, sequential chain
/// of file reads and writes.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report.
    // Example: RUST_LOG=recsift=debug,recsift_json=trace recsift "all"
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recsift=warn,recsift_json=warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("Starting recsift CLI");

    let cli = Cli::parse_args();
    match cli.execute().await {
        Ok(()) => {
            tracing::debug!("Recsift CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Recsift CLI failed");
            let config = OutputConfig::from_env();
            let _ = print_error(&mut io::stderr().lock(), &err.to_string(), &config);
            ExitCode::FAILURE
        }
    }
}
