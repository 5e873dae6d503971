//! subtrack binary entry point.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;

use subtrack_cli::cli::Args;
use subtrack_cli::screen::{ConsoleScreen, Screen};

fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match subtrack_cli::run(args) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Validation failures block the single triggering action; the user
        // corrects the input and re-attempts.
        Err(e) if e.is_user_error() => {
            ConsoleScreen::new().alert(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
