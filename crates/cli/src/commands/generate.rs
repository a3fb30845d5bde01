//! Generate command implementation.
//!
//! Snapshots a server and/or cloud account into `<output>/main.tf` and
//! `<output>/imports.sh`, optionally alongside a raw data export under
//! `<output>/data/`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use typesense_client::{CloudClient, TypesenseClient};
use typesense_config::SettingsLoader;

use crate::cancellation::CancellationToken;
use crate::generator;
use crate::progress::StepSpinner;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    host: Option<String>,
    port: u16,
    protocol: String,
    api_key: Option<String>,
    cloud_api_key: Option<String>,
    output: PathBuf,
    include_data: bool,
    quiet: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let mut loader = SettingsLoader::new()
        .with_port(port)
        .with_protocol(protocol);
    if let Some(host) = host {
        loader = loader.with_host(host);
    }
    if let Some(api_key) = api_key {
        loader = loader.with_api_key(api_key);
    }
    if let Some(cloud_api_key) = cloud_api_key {
        loader = loader.with_cloud_api_key(cloud_api_key);
    }
    let settings = loader
        .from_env()
        .and_then(|l| l.build())
        .context("resolving connection settings")?;

    let server_client = settings
        .server
        .as_ref()
        .map(TypesenseClient::from_settings)
        .transpose()
        .context("building server client")?;
    let cloud_client = settings
        .cloud
        .as_ref()
        .map(CloudClient::from_settings)
        .transpose()
        .context("building cloud client")?;

    let server_snapshot = match &server_client {
        Some(client) => {
            let spinner = StepSpinner::new(!quiet, "Snapshotting cluster resources");
            let snapshot = generator::snapshot_server(client, cancel).await?;
            spinner.finish();
            info!(
                entities = snapshot.entity_count(),
                generation = ?snapshot.generation,
                "server snapshot complete"
            );
            Some(snapshot)
        }
        None => None,
    };

    let clusters = match &cloud_client {
        Some(client) => {
            let spinner = StepSpinner::new(!quiet, "Listing cloud clusters");
            let clusters = generator::snapshot_cloud(client).await?;
            spinner.finish();
            clusters
        }
        None => Vec::new(),
    };

    cancel.check()?;
    let generated_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let files = generator::render_all(server_snapshot.as_ref(), &clusters, &generated_at);
    generator::write_output(&output, &files).await?;

    if include_data {
        let (Some(client), Some(snapshot)) = (&server_client, &server_snapshot) else {
            anyhow::bail!("--include-data requires a server connection (--host and --api-key)");
        };
        let spinner = StepSpinner::new(!quiet, "Exporting collection data");
        generator::data_export::export_data(
            client,
            snapshot,
            &files.collection_addresses,
            &output.join("data"),
            cancel,
        )
        .await?;
        spinner.finish();
    }

    let entity_count = server_snapshot.as_ref().map_or(0, |s| s.entity_count()) + clusters.len();
    println!(
        "Generated {} resource(s) into {}",
        entity_count,
        output.display()
    );
    println!("  {}", output.join("main.tf").display());
    println!("  {}", output.join("imports.sh").display());
    if include_data {
        println!("  {}", output.join("data").display());
    }

    Ok(())
}
