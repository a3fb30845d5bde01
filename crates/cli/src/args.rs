//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate flag combinations beyond clap's reach (the settings
//!   loader rejects incomplete server/cloud sources before any network call).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use typesense_config::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TYPESENSE_PORT};

#[derive(Parser)]
#[command(name = "typesense-cli")]
#[command(about = "Typesense CLI - Generate declarative config from and migrate data between Typesense clusters", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  typesense-cli generate --host localhost --api-key $TYPESENSE_API_KEY\n  typesense-cli generate --cloud-api-key $TYPESENSE_CLOUD_API_KEY --output ./infra\n  typesense-cli generate --host localhost --api-key xyz --include-data\n  typesense-cli migrate --source-dir ./generated --target-host new-cluster.example.com --target-api-key xyz\n  typesense-cli migrate --source-dir ./generated --target-host localhost --target-api-key xyz --include-documents\n"
)]
pub struct Cli {
    /// Suppress all progress output (spinners / progress bars).
    ///
    /// Note: progress indicators always write to STDERR; this flag disables
    /// them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Snapshot a cluster into declarative config plus an import script
    Generate {
        /// Hostname of the Typesense server to snapshot
        #[arg(long, env = "TYPESENSE_HOST")]
        host: Option<String>,

        /// Port of the Typesense server
        #[arg(long, env = "TYPESENSE_PORT", default_value_t = DEFAULT_TYPESENSE_PORT)]
        port: u16,

        /// Protocol for the server connection (http or https)
        #[arg(long, env = "TYPESENSE_PROTOCOL", default_value = "http")]
        protocol: String,

        /// Admin API key for the Typesense server
        #[arg(long, env = "TYPESENSE_API_KEY")]
        api_key: Option<String>,

        /// Management API key for Typesense Cloud
        #[arg(long, env = "TYPESENSE_CLOUD_API_KEY")]
        cloud_api_key: Option<String>,

        /// Output directory for generated files
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Also export raw data: schemas, documents (JSONL), synonyms,
        /// overrides, and stopwords under <output>/data/
        #[arg(long)]
        include_data: bool,
    },

    /// Replay a generated export directory onto a target cluster
    Migrate {
        /// Export directory produced by `generate --include-data`
        #[arg(long, required = true)]
        source_dir: PathBuf,

        /// Hostname of the target Typesense server
        #[arg(long, required = true)]
        target_host: String,

        /// Port of the target Typesense server
        #[arg(long, default_value_t = DEFAULT_TYPESENSE_PORT)]
        target_port: u16,

        /// Protocol for the target connection (http or https)
        #[arg(long, default_value = "http")]
        target_protocol: String,

        /// Admin API key for the target Typesense server
        #[arg(long, required = true)]
        target_api_key: String,

        /// Also replay document data (potentially very large)
        #[arg(long)]
        include_documents: bool,
    },
}
