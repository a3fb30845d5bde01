//! Typesense CLI - snapshot clusters into declarative configuration and
//! migrate exported data between clusters.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute the generate/migrate commands via the shared client library.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Settings validation (see `crates/config`).
//!
//! Invariants:
//! - `.env` is loaded BEFORE CLI parsing so clap env defaults can read it.
//! - Any command error propagates to a non-zero, structured process exit
//!   code.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod generator;
mod migrator;
mod progress;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env before CLI parsing so clap env defaults can read .env values.
    let _ = typesense_config::SettingsLoader::new().load_dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Ctrl+C flips the shared token; commands check it between steps and
    // in-flight requests are abandoned without compensating actions.
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
