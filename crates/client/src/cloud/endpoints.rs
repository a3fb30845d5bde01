//! REST endpoint implementations for the Typesense Cloud Management API.
//!
//! Same per-operation contract as the server endpoints: 2xx decodes, 404 on
//! gets is a typed miss, everything else preserves status and body.

use reqwest::{Client, Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};

use crate::cloud::models::{
    Cluster, ClusterApiKeys, ClusterListResponse, ClusterSchema, ConfigChange, ConfigChangeSchema,
};
use crate::endpoints::encode_path_segment;
use crate::error::Result;

/// Auth header for the Cloud Management API.
pub(crate) const CLOUD_API_KEY_HEADER: &str = "X-TYPESENSE-CLOUD-MANAGEMENT-API-KEY";

fn json_request(http: &Client, method: Method, url: &str, api_key: &SecretString) -> RequestBuilder {
    http.request(method, url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(CLOUD_API_KEY_HEADER, api_key.expose_secret())
}

/// Provision a new cluster.
pub async fn create_cluster(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &ClusterSchema,
) -> Result<Cluster> {
    let url = format!("{}/clusters", base_url);
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = crate::endpoints::expect_success(response).await?;
    Ok(response.json().await?)
}

/// List clusters. Enveloped as `{"clusters": [...]}`.
pub async fn list_clusters(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<Cluster>> {
    let url = format!("{}/clusters", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = crate::endpoints::expect_success(response).await?;
    let envelope: ClusterListResponse = response.json().await?;
    Ok(envelope.clusters)
}

/// Get a cluster by id. 404 is a typed miss.
pub async fn get_cluster(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<Option<Cluster>> {
    let url = format!("{}/clusters/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    crate::endpoints::decode_optional(response).await
}

/// Tear down a cluster by id.
pub async fn delete_cluster(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<()> {
    let url = format!("{}/clusters/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    crate::endpoints::expect_success(response).await?;
    Ok(())
}

/// Generate admin and search-only API keys for a cluster. The values are
/// returned once and cannot be re-requested.
pub async fn generate_cluster_api_keys(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<ClusterApiKeys> {
    let url = format!("{}/clusters/{}/api-keys", base_url, encode_path_segment(id));
    let response = json_request(http, Method::POST, &url, api_key)
        .send()
        .await?;
    let response = crate::endpoints::expect_success(response).await?;
    Ok(response.json().await?)
}

/// Schedule a configuration change for a cluster.
pub async fn create_config_change(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    cluster_id: &str,
    schema: &ConfigChangeSchema,
) -> Result<ConfigChange> {
    let url = format!(
        "{}/clusters/{}/configuration-changes",
        base_url,
        encode_path_segment(cluster_id)
    );
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = crate::endpoints::expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a scheduled configuration change. 404 is a typed miss.
pub async fn get_config_change(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    cluster_id: &str,
    change_id: &str,
) -> Result<Option<ConfigChange>> {
    let url = format!(
        "{}/clusters/{}/configuration-changes/{}",
        base_url,
        encode_path_segment(cluster_id),
        encode_path_segment(change_id)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    crate::endpoints::decode_optional(response).await
}

/// Cancel a scheduled configuration change.
pub async fn delete_config_change(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    cluster_id: &str,
    change_id: &str,
) -> Result<()> {
    let url = format!(
        "{}/clusters/{}/configuration-changes/{}",
        base_url,
        encode_path_segment(cluster_id),
        encode_path_segment(change_id)
    );
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    crate::endpoints::expect_success(response).await?;
    Ok(())
}
