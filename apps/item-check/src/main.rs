//! item-check entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use item_check::{exit_status, run, Cli};

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let result = run(&cli);

    if let Err(err) = &result {
        error!("{err:#}");
    }

    ExitCode::from(exit_status(&result))
}

/// Logs go to stderr so stdout carries only the report.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show loaded config and parsed documents
/// - `RUST_LOG=item_core=trace` - Show every rejection as it is recorded
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
