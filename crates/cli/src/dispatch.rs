//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handlers.
//! - Pass the cancellation token through so Ctrl+C unwinds between steps.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings resolution (each command builds its own loader; `generate`
//!   and `migrate` have disjoint connection flags).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    match cli.command {
        Commands::Generate {
            host,
            port,
            protocol,
            api_key,
            cloud_api_key,
            output,
            include_data,
        } => {
            commands::generate::run(
                host,
                port,
                protocol,
                api_key,
                cloud_api_key,
                output,
                include_data,
                cli.quiet,
                cancel,
            )
            .await
        }
        Commands::Migrate {
            source_dir,
            target_host,
            target_port,
            target_protocol,
            target_api_key,
            include_documents,
        } => {
            commands::migrate::run(
                source_dir,
                target_host,
                target_port,
                target_protocol,
                target_api_key,
                include_documents,
                cancel,
            )
            .await
        }
    }
}
