//! Configuration generator: snapshot a live cluster (and/or cloud account)
//! into declarative configuration text plus an executable import script.
//!
//! Responsibilities:
//! - Enumerate remote entities through the typed clients, choosing the
//!   legacy or set-form synonym/override surface once per run from the
//!   detected server generation.
//! - Derive deterministic, collision-free resource identifiers.
//! - Render `main.tf` + `imports.sh`, and optionally the raw data export.
//!
//! Non-responsibilities:
//! - No Terraform state manipulation; the import script is emitted for the
//!   operator to run.

pub(crate) mod data_export;
pub(crate) mod hcl;
pub(crate) mod imports;
pub(crate) mod names;
pub(crate) mod render;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use typesense_client::cloud::models::Cluster;
use typesense_client::models::{
    AnalyticsRule, ApiKey, Collection, CollectionAlias, CurationSet, Override, Preset,
    StopwordsSet, Synonym, SynonymSet,
};
use typesense_client::{ApiGeneration, CloudClient, TypesenseClient};

use crate::cancellation::CancellationToken;
use imports::ImportLine;
use names::{sanitize_resource_name, unique_resource_name};
use render::Variable;

/// Everything fetched from one server, version-branch already resolved.
#[derive(Debug, Default)]
pub(crate) struct ServerSnapshot {
    pub generation: Option<ApiGeneration>,
    pub collections: Vec<Collection>,
    /// Legacy generation only: per-collection synonyms/overrides, keyed by
    /// collection name.
    pub synonyms: Vec<(String, Vec<Synonym>)>,
    pub overrides: Vec<(String, Vec<Override>)>,
    /// Current generation only.
    pub synonym_sets: Vec<SynonymSet>,
    pub curation_sets: Vec<CurationSet>,
    pub stopwords_sets: Vec<StopwordsSet>,
    pub api_keys: Vec<ApiKey>,
    pub aliases: Vec<CollectionAlias>,
    pub presets: Vec<Preset>,
    pub analytics_rules: Vec<AnalyticsRule>,
}

impl ServerSnapshot {
    /// Total entity count, for reporting.
    pub(crate) fn entity_count(&self) -> usize {
        self.collections.len()
            + self.synonyms.iter().map(|(_, s)| s.len()).sum::<usize>()
            + self.overrides.iter().map(|(_, o)| o.len()).sum::<usize>()
            + self.synonym_sets.len()
            + self.curation_sets.len()
            + self.stopwords_sets.len()
            + self.api_keys.len()
            + self.aliases.len()
            + self.presets.len()
            + self.analytics_rules.len()
    }
}

/// Snapshot a server: collections first, then the per-collection or
/// set-form rewrite rules depending on the detected generation, then the
/// global resources.
pub(crate) async fn snapshot_server(
    client: &TypesenseClient,
    cancel: &CancellationToken,
) -> Result<ServerSnapshot> {
    let generation = client.api_generation().await;
    let mut snapshot = ServerSnapshot {
        generation: Some(generation),
        ..ServerSnapshot::default()
    };

    snapshot.collections = client
        .list_collections()
        .await
        .context("listing collections")?;

    match generation {
        ApiGeneration::Legacy => {
            for collection in &snapshot.collections {
                cancel.check()?;
                let synonyms = client
                    .list_synonyms(&collection.name)
                    .await
                    .with_context(|| format!("listing synonyms of '{}'", collection.name))?;
                if !synonyms.is_empty() {
                    snapshot.synonyms.push((collection.name.clone(), synonyms));
                }
                let overrides = client
                    .list_overrides(&collection.name)
                    .await
                    .with_context(|| format!("listing overrides of '{}'", collection.name))?;
                if !overrides.is_empty() {
                    snapshot.overrides.push((collection.name.clone(), overrides));
                }
            }
        }
        ApiGeneration::Current => {
            snapshot.synonym_sets = client
                .list_synonym_sets()
                .await
                .context("listing synonym sets")?;
            snapshot.curation_sets = client
                .list_curation_sets()
                .await
                .context("listing curation sets")?;
        }
    }

    cancel.check()?;
    snapshot.stopwords_sets = client
        .list_stopwords_sets()
        .await
        .context("listing stopwords sets")?;
    snapshot.api_keys = client.list_keys().await.context("listing API keys")?;
    snapshot.aliases = client.list_aliases().await.context("listing aliases")?;
    snapshot.presets = client.list_presets().await.context("listing presets")?;
    snapshot.analytics_rules = client
        .list_analytics_rules()
        .await
        .context("listing analytics rules")?;

    Ok(snapshot)
}

/// Snapshot a cloud account's clusters.
pub(crate) async fn snapshot_cloud(client: &CloudClient) -> Result<Vec<Cluster>> {
    client.list_clusters().await.context("listing clusters")
}

/// The rendered output of one generate run.
pub(crate) struct GeneratedFiles {
    pub main_tf: String,
    pub imports_sh: String,
    /// Collection name -> resource address, reused for data file stems.
    pub collection_addresses: Vec<(String, String)>,
}

/// Render the whole snapshot into `main.tf` text plus the import script.
pub(crate) fn render_all(
    server: Option<&ServerSnapshot>,
    clusters: &[Cluster],
    generated_at: &str,
) -> GeneratedFiles {
    let mut seen = HashSet::new();
    let mut blocks: Vec<String> = Vec::new();
    let mut variables: Vec<Variable> = Vec::new();
    let mut import_lines: Vec<ImportLine> = Vec::new();
    let mut collection_addresses = Vec::new();

    if let Some(snapshot) = server {
        for collection in &snapshot.collections {
            let address =
                unique_resource_name(&sanitize_resource_name(&collection.name), &mut seen);
            blocks.push(render::render_collection(&address, collection, &mut variables));
            import_lines.push(ImportLine::new(
                "typesense_collection",
                &address,
                collection.name.clone(),
            ));
            collection_addresses.push((collection.name.clone(), address));
        }

        for (collection_name, synonyms) in &snapshot.synonyms {
            for synonym in synonyms {
                let base =
                    sanitize_resource_name(&format!("{}_{}", collection_name, synonym.id));
                let address = unique_resource_name(&base, &mut seen);
                blocks.push(render::render_synonym(&address, collection_name, synonym));
                import_lines.push(ImportLine::new(
                    "typesense_synonym",
                    &address,
                    format!("{}/{}", collection_name, synonym.id),
                ));
            }
        }

        for (collection_name, overrides) in &snapshot.overrides {
            for entry in overrides {
                let base = sanitize_resource_name(&format!("{}_{}", collection_name, entry.id));
                let address = unique_resource_name(&base, &mut seen);
                blocks.push(render::render_override(&address, collection_name, entry));
                import_lines.push(ImportLine::new(
                    "typesense_override",
                    &address,
                    format!("{}/{}", collection_name, entry.id),
                ));
            }
        }

        for set in &snapshot.synonym_sets {
            let address = unique_resource_name(&sanitize_resource_name(&set.name), &mut seen);
            blocks.push(render::render_synonym_set(&address, set));
            import_lines.push(ImportLine::new(
                "typesense_synonym_set",
                &address,
                set.name.clone(),
            ));
        }

        for set in &snapshot.curation_sets {
            let address = unique_resource_name(&sanitize_resource_name(&set.name), &mut seen);
            blocks.push(render::render_curation_set(&address, set));
            import_lines.push(ImportLine::new(
                "typesense_curation_set",
                &address,
                set.name.clone(),
            ));
        }

        for set in &snapshot.stopwords_sets {
            let address = unique_resource_name(&sanitize_resource_name(&set.id), &mut seen);
            blocks.push(render::render_stopwords_set(&address, set));
            import_lines.push(ImportLine::new(
                "typesense_stopwords_set",
                &address,
                set.id.clone(),
            ));
        }

        for key in &snapshot.api_keys {
            let address = unique_resource_name(&sanitize_resource_name(&key.description), &mut seen);
            blocks.push(render::render_api_key(&address, key, &mut variables));
            import_lines.push(ImportLine::new(
                "typesense_api_key",
                &address,
                key.id.to_string(),
            ));
        }

        for alias in &snapshot.aliases {
            let address = unique_resource_name(&sanitize_resource_name(&alias.name), &mut seen);
            blocks.push(render::render_alias(&address, alias));
            import_lines.push(ImportLine::new(
                "typesense_alias",
                &address,
                alias.name.clone(),
            ));
        }

        for preset in &snapshot.presets {
            let address = unique_resource_name(&sanitize_resource_name(&preset.name), &mut seen);
            blocks.push(render::render_preset(&address, preset));
            import_lines.push(ImportLine::new(
                "typesense_preset",
                &address,
                preset.name.clone(),
            ));
        }

        for rule in &snapshot.analytics_rules {
            let address = unique_resource_name(&sanitize_resource_name(&rule.name), &mut seen);
            blocks.push(render::render_analytics_rule(&address, rule));
            import_lines.push(ImportLine::new(
                "typesense_analytics_rule",
                &address,
                rule.name.clone(),
            ));
        }
    }

    for cluster in clusters {
        let natural_name = cluster.name.as_deref().unwrap_or(&cluster.id);
        let address = unique_resource_name(&sanitize_resource_name(natural_name), &mut seen);
        blocks.push(render::render_cluster(&address, cluster));
        import_lines.push(ImportLine::new(
            "typesense_cluster",
            &address,
            cluster.id.clone(),
        ));
    }

    let mut main_tf = render::render_header(generated_at);
    for variable in &variables {
        main_tf.push('\n');
        main_tf.push_str(&render::render_variable(variable));
    }
    for block in &blocks {
        main_tf.push('\n');
        main_tf.push_str(block);
    }

    GeneratedFiles {
        main_tf,
        imports_sh: imports::render_import_script(&import_lines),
        collection_addresses,
    }
}

/// Write `main.tf` and `imports.sh` into the output directory, marking the
/// script executable where the platform supports it.
pub(crate) async fn write_output(output_dir: &Path, files: &GeneratedFiles) -> Result<()> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let main_tf_path = output_dir.join("main.tf");
    tokio::fs::write(&main_tf_path, &files.main_tf)
        .await
        .with_context(|| format!("writing {}", main_tf_path.display()))?;

    let imports_path = output_dir.join("imports.sh");
    tokio::fs::write(&imports_path, &files.imports_sh)
        .await
        .with_context(|| format!("writing {}", imports_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o755);
        tokio::fs::set_permissions(&imports_path, perms)
            .await
            .with_context(|| format!("marking {} executable", imports_path.display()))?;
    }

    Ok(())
}
