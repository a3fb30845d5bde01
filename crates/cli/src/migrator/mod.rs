//! Data migrator: replay a generator export directory onto a target
//! cluster.
//!
//! Replay order per collection is strict: create collection (skipped when
//! the name already exists on the target), stream-import documents, import
//! synonyms, import overrides. Global stopwords sets (and, for server >= 30
//! exports, synonym/curation sets) follow after all collections.
//!
//! There is no transactional rollback. A failure creating a collection or
//! importing synonyms/overrides aborts the whole migration, leaving the
//! target partially populated; partial per-document failures are reported
//! and do not abort.

pub(crate) mod source;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use typesense_client::TypesenseClient;
use typesense_client::models::{
    CollectionSchema, CurationSet, CurationSetSchema, ImportAction, ImportSummary, StopwordsSet,
    StopwordsSetSchema, Synonym, SynonymSchema, SynonymSet, SynonymSetSchema,
};

use crate::cancellation::CancellationToken;
use source::{CollectionExport, ExportDirectory};

/// Outcome of replaying one collection.
#[derive(Debug, Default)]
pub(crate) struct CollectionReport {
    pub name: String,
    /// False when the collection already existed on the target.
    pub created: bool,
    /// None when documents were skipped (no file, empty file, or opt-out).
    pub documents: Option<ImportSummary>,
    pub synonyms: usize,
    pub overrides: usize,
}

/// Outcome of a whole migration run.
#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub collections: Vec<CollectionReport>,
    pub stopwords_sets: usize,
    pub synonym_sets: usize,
    pub curation_sets: usize,
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

async fn migrate_collection(
    client: &TypesenseClient,
    export: &CollectionExport,
    include_documents: bool,
    cancel: &CancellationToken,
) -> Result<CollectionReport> {
    let schema: CollectionSchema = read_json(&export.schema_path).await?;
    let name = schema.name.clone();
    let mut report = CollectionReport {
        name: name.clone(),
        ..CollectionReport::default()
    };

    match client
        .get_collection(&name)
        .await
        .with_context(|| format!("checking for collection '{}' on target", name))?
    {
        Some(_) => {
            info!(collection = %name, "collection already exists on target, skipping create");
        }
        None => {
            client
                .create_collection(&schema)
                .await
                .with_context(|| format!("creating collection '{}'", name))?;
            report.created = true;
        }
    }

    cancel.check()?;
    if include_documents {
        if let Some(documents_path) = &export.documents_path {
            let size = tokio::fs::metadata(documents_path)
                .await
                .with_context(|| format!("reading {}", documents_path.display()))?
                .len();
            if size == 0 {
                info!(collection = %name, "no documents to import");
            } else {
                let summary = client
                    .import_documents_from_file(&name, ImportAction::Upsert, documents_path)
                    .await
                    .with_context(|| format!("importing documents into '{}'", name))?;
                if summary.failed > 0 {
                    warn!(
                        collection = %name,
                        succeeded = summary.succeeded,
                        failed = summary.failed,
                        "some documents failed to import"
                    );
                }
                report.documents = Some(summary);
            }
        }
    }

    if let Some(synonyms_path) = &export.synonyms_path {
        let synonyms: Vec<Synonym> = read_json(synonyms_path).await?;
        for synonym in &synonyms {
            cancel.check()?;
            let schema = SynonymSchema {
                synonyms: synonym.synonyms.clone(),
                root: synonym.root.clone(),
                locale: synonym.locale.clone(),
                symbols_to_index: synonym.symbols_to_index.clone(),
            };
            client
                .upsert_synonym(&name, &synonym.id, &schema)
                .await
                .with_context(|| format!("importing synonym '{}' into '{}'", synonym.id, name))?;
        }
        report.synonyms = synonyms.len();
    }

    if let Some(overrides_path) = &export.overrides_path {
        let overrides: Vec<typesense_client::models::Override> = read_json(overrides_path).await?;
        for entry in &overrides {
            cancel.check()?;
            let schema = typesense_client::models::OverrideSchema {
                rule: entry.rule.clone(),
                includes: entry.includes.clone(),
                excludes: entry.excludes.clone(),
                filter_by: entry.filter_by.clone(),
                sort_by: entry.sort_by.clone(),
                replace_query: entry.replace_query.clone(),
                remove_matched_tokens: entry.remove_matched_tokens,
                filter_curated_hits: entry.filter_curated_hits,
                effective_from_ts: entry.effective_from_ts,
                effective_to_ts: entry.effective_to_ts,
                stop_processing: entry.stop_processing,
                metadata: entry.metadata.clone(),
            };
            client
                .upsert_override(&name, &entry.id, &schema)
                .await
                .with_context(|| format!("importing override '{}' into '{}'", entry.id, name))?;
        }
        report.overrides = overrides.len();
    }

    Ok(report)
}

/// Replay the whole export directory onto the target cluster.
pub(crate) async fn run(
    client: &TypesenseClient,
    export: &ExportDirectory,
    include_documents: bool,
    cancel: &CancellationToken,
) -> Result<MigrationReport> {
    let mut report = MigrationReport::default();

    for collection in &export.collections {
        cancel.check()?;
        let collection_report =
            migrate_collection(client, collection, include_documents, cancel).await?;
        report.collections.push(collection_report);
    }

    if let Some(stopwords_path) = &export.stopwords_path {
        let sets: Vec<StopwordsSet> = read_json(stopwords_path).await?;
        for set in &sets {
            cancel.check()?;
            let schema = StopwordsSetSchema {
                stopwords: set.stopwords.clone(),
                locale: set.locale.clone(),
            };
            client
                .upsert_stopwords_set(&set.id, &schema)
                .await
                .with_context(|| format!("importing stopwords set '{}'", set.id))?;
        }
        report.stopwords_sets = sets.len();
    }

    if let Some(synonym_sets_path) = &export.synonym_sets_path {
        let sets: Vec<SynonymSet> = read_json(synonym_sets_path).await?;
        for set in &sets {
            cancel.check()?;
            let schema = SynonymSetSchema {
                items: set.items.clone(),
            };
            client
                .upsert_synonym_set(&set.name, &schema)
                .await
                .with_context(|| format!("importing synonym set '{}'", set.name))?;
        }
        report.synonym_sets = sets.len();
    }

    if let Some(curation_sets_path) = &export.curation_sets_path {
        let sets: Vec<CurationSet> = read_json(curation_sets_path).await?;
        for set in &sets {
            cancel.check()?;
            let schema = CurationSetSchema {
                items: set.items.clone(),
            };
            client
                .upsert_curation_set(&set.name, &schema)
                .await
                .with_context(|| format!("importing curation set '{}'", set.name))?;
        }
        report.curation_sets = sets.len();
    }

    Ok(report)
}
