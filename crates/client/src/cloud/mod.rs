//! Typesense Cloud Management API client.
//!
//! Responsibilities:
//! - Cluster lifecycle: create, list, get, delete.
//! - One-shot API key generation for a cluster.
//! - Scheduled configuration changes: create, get, delete (no polling baked
//!   in; the caller decides whether to wait).
//! - [`CloudClient::wait_for_cluster_ready`]: the only retry/poll loop in
//!   the system.
//!
//! # Invariants
//! - Every request carries `X-TYPESENSE-CLOUD-MANAGEMENT-API-KEY`.
//! - Polling is by design, not error recovery; nothing else retries.

pub mod models;

mod endpoints;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use typesense_config::CloudSettings;
use typesense_config::constants::{DEFAULT_CLUSTER_POLL_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};

use crate::error::{ClientError, Result};
use models::{
    Cluster, ClusterApiKeys, ClusterSchema, ClusterStatus, ConfigChange, ConfigChangeSchema,
};

/// Typesense Cloud Management API client.
#[derive(Debug)]
pub struct CloudClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    poll_interval: Duration,
}

/// Builder for creating a new [`CloudClient`].
pub struct CloudClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    timeout: Duration,
    poll_interval: Duration,
}

impl Default for CloudClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_secs(DEFAULT_CLUSTER_POLL_INTERVAL_SECS),
        }
    }
}

impl CloudClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the management API base URL. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the management API key.
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the readiness poll interval. Default is 30 seconds; tests
    /// shrink this.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CloudClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?
            .trim_end_matches('/')
            .to_string();
        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::InvalidUrl("management API key is required".to_string()))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(CloudClient {
            http,
            base_url,
            api_key,
            poll_interval: self.poll_interval,
        })
    }
}

impl CloudClient {
    /// Create a new client builder.
    pub fn builder() -> CloudClientBuilder {
        CloudClientBuilder::new()
    }

    /// Build a client from resolved [`CloudSettings`].
    pub fn from_settings(settings: &CloudSettings) -> Result<Self> {
        Self::builder()
            .base_url(settings.base_url.clone())
            .api_key(settings.api_key.expose_secret().to_string())
            .timeout(settings.timeout)
            .build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Provision a new cluster.
    pub async fn create_cluster(&self, schema: &ClusterSchema) -> Result<Cluster> {
        endpoints::create_cluster(&self.http, &self.base_url, &self.api_key, schema).await
    }

    /// List all clusters.
    pub async fn list_clusters(&self) -> Result<Vec<Cluster>> {
        endpoints::list_clusters(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a cluster by id. Returns `None` when it does not exist.
    pub async fn get_cluster(&self, id: &str) -> Result<Option<Cluster>> {
        endpoints::get_cluster(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Tear down a cluster by id.
    pub async fn delete_cluster(&self, id: &str) -> Result<()> {
        endpoints::delete_cluster(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Generate admin and search-only keys for a cluster. The values are
    /// returned once and cannot be re-requested.
    pub async fn generate_cluster_api_keys(&self, id: &str) -> Result<ClusterApiKeys> {
        endpoints::generate_cluster_api_keys(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Schedule a configuration change for a cluster.
    pub async fn create_config_change(
        &self,
        cluster_id: &str,
        schema: &ConfigChangeSchema,
    ) -> Result<ConfigChange> {
        endpoints::create_config_change(&self.http, &self.base_url, &self.api_key, cluster_id, schema)
            .await
    }

    /// Get a scheduled configuration change. Returns `None` when it does not
    /// exist.
    pub async fn get_config_change(
        &self,
        cluster_id: &str,
        change_id: &str,
    ) -> Result<Option<ConfigChange>> {
        endpoints::get_config_change(
            &self.http,
            &self.base_url,
            &self.api_key,
            cluster_id,
            change_id,
        )
        .await
    }

    /// Cancel a scheduled configuration change.
    pub async fn delete_config_change(&self, cluster_id: &str, change_id: &str) -> Result<()> {
        endpoints::delete_config_change(
            &self.http,
            &self.base_url,
            &self.api_key,
            cluster_id,
            change_id,
        )
        .await
    }

    /// Poll a cluster until it reaches `in_service`.
    ///
    /// Polls [`CloudClient::get_cluster`] on a fixed interval. `failed` and
    /// `terminated` fail fast; every other status keeps polling until the
    /// caller's deadline elapses. A cluster that disappears mid-poll is
    /// treated as terminated.
    ///
    /// Dropping the returned future aborts the in-flight request; no
    /// compensating actions are taken.
    pub async fn wait_for_cluster_ready(&self, id: &str, timeout: Duration) -> Result<Cluster> {
        let start = std::time::Instant::now();

        loop {
            let cluster = self.get_cluster(id).await?.ok_or_else(|| {
                ClientError::ClusterProvisioningFailed {
                    cluster_id: id.to_string(),
                    status: ClusterStatus::Terminated.as_str().to_string(),
                }
            })?;

            match cluster.status {
                ClusterStatus::InService => {
                    debug!(cluster_id = id, "cluster is in service");
                    return Ok(cluster);
                }
                status if status.is_error_terminal() => {
                    return Err(ClientError::ClusterProvisioningFailed {
                        cluster_id: id.to_string(),
                        status: status.as_str().to_string(),
                    });
                }
                status => {
                    debug!(cluster_id = id, status = status.as_str(), "cluster not ready yet");
                }
            }

            if start.elapsed() > timeout {
                return Err(ClientError::ClusterReadyTimeout {
                    cluster_id: id.to_string(),
                    timeout,
                });
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
