//! Migrate command implementation.
//!
//! Replays a generator export directory onto a target cluster: collections,
//! then documents (opt-in), then synonyms/overrides, then global sets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use typesense_client::TypesenseClient;
use typesense_config::{ConfigError, SettingsLoader};

use crate::cancellation::CancellationToken;
use crate::migrator;

pub async fn run(
    source_dir: PathBuf,
    target_host: String,
    target_port: u16,
    target_protocol: String,
    target_api_key: String,
    include_documents: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(ConfigError::SourceDirMissing(source_dir).into());
    }

    if include_documents {
        eprintln!("WARNING: --include-documents replays every exported document onto the target.");
        eprintln!("         Depending on the export size this may take a long time and consume");
        eprintln!("         significant cluster resources.");
    }

    let settings = SettingsLoader::new()
        .with_host(target_host)
        .with_port(target_port)
        .with_protocol(target_protocol)
        .with_api_key(target_api_key)
        .build()
        .context("resolving target connection settings")?;
    let server = settings
        .server
        .context("target host and API key did not resolve to server settings")?;
    let client = TypesenseClient::from_settings(&server).context("building target client")?;

    let export = migrator::source::scan(&source_dir)?;
    if export.collections.is_empty() {
        println!("No collection schemas found in {}", source_dir.display());
        return Ok(());
    }

    let report = migrator::run(&client, &export, include_documents, cancel).await?;

    println!("Migration complete:");
    for collection in &report.collections {
        let created = if collection.created {
            "created"
        } else {
            "already existed"
        };
        match &collection.documents {
            Some(summary) => println!(
                "  {} ({}): {} document(s) imported, {} failed, {} synonym(s), {} override(s)",
                collection.name,
                created,
                summary.succeeded,
                summary.failed,
                collection.synonyms,
                collection.overrides
            ),
            None => println!(
                "  {} ({}): no documents to import, {} synonym(s), {} override(s)",
                collection.name, created, collection.synonyms, collection.overrides
            ),
        }
    }
    if report.stopwords_sets > 0 {
        println!("  {} stopwords set(s)", report.stopwords_sets);
    }
    if report.synonym_sets > 0 {
        println!("  {} synonym set(s)", report.synonym_sets);
    }
    if report.curation_sets > 0 {
        println!("  {} curation set(s)", report.curation_sets);
    }

    Ok(())
}
