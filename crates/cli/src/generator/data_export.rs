//! Raw data export for `generate --include-data`.
//!
//! Responsibilities:
//! - Write per-collection schema/synonyms/overrides JSON files and the
//!   global stopwords file under `<output>/data/`.
//! - Stream each collection's documents into a `.jsonl` file without
//!   buffering the whole payload in memory.
//!
//! File stems reuse the collection's resource address so companion files
//! line up and awkward collection names stay filesystem-safe; the real
//! collection name travels inside the schema JSON.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use typesense_client::TypesenseClient;

use crate::cancellation::CancellationToken;
use crate::generator::ServerSnapshot;

/// Global stopwords export file name.
pub(crate) const STOPWORDS_FILE: &str = "_stopwords.json";
/// Global synonym-set export file name (server >= 30 snapshots).
pub(crate) const SYNONYM_SETS_FILE: &str = "_synonym_sets.json";
/// Global curation-set export file name (server >= 30 snapshots).
pub(crate) const CURATION_SETS_FILE: &str = "_curation_sets.json";

async fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export the snapshot's raw data into `data_dir`.
///
/// `collection_addresses` maps collection names to the address used as the
/// file stem, in snapshot order.
pub(crate) async fn export_data(
    client: &TypesenseClient,
    snapshot: &ServerSnapshot,
    collection_addresses: &[(String, String)],
    data_dir: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .with_context(|| format!("creating data directory {}", data_dir.display()))?;

    for (collection, address) in collection_addresses {
        cancel.check()?;

        let schema = snapshot
            .collections
            .iter()
            .find(|c| &c.name == collection)
            .map(|c| c.schema())
            .with_context(|| format!("collection '{}' missing from snapshot", collection))?;
        write_pretty_json(&data_dir.join(format!("{}.schema.json", address)), &schema).await?;

        let documents_path = data_dir.join(format!("{}.jsonl", address));
        let bytes = client
            .export_documents_to_file(collection, &documents_path)
            .await
            .with_context(|| format!("exporting documents of '{}'", collection))?;
        info!(collection, bytes, "exported documents");

        if let Some((_, synonyms)) = snapshot.synonyms.iter().find(|(name, _)| name == collection)
        {
            write_pretty_json(&data_dir.join(format!("{}.synonyms.json", address)), synonyms)
                .await?;
        }
        if let Some((_, overrides)) =
            snapshot.overrides.iter().find(|(name, _)| name == collection)
        {
            write_pretty_json(&data_dir.join(format!("{}.overrides.json", address)), overrides)
                .await?;
        }
    }

    if !snapshot.synonym_sets.is_empty() {
        write_pretty_json(&data_dir.join(SYNONYM_SETS_FILE), &snapshot.synonym_sets).await?;
    }
    if !snapshot.curation_sets.is_empty() {
        write_pretty_json(&data_dir.join(CURATION_SETS_FILE), &snapshot.curation_sets).await?;
    }
    if !snapshot.stopwords_sets.is_empty() {
        write_pretty_json(&data_dir.join(STOPWORDS_FILE), &snapshot.stopwords_sets).await?;
    }

    Ok(())
}
