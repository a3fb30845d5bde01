//! Override (curation) endpoints: legacy per-collection overrides
//! (server < 30) and curation sets (server >= 30).
//!
//! Same version-retirement contract as synonyms: 404 on the legacy list
//! endpoint means "zero items" on newer servers.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{
    CurationSet, CurationSetSchema, Override, OverrideListResponse, OverrideSchema,
};

/// Upsert a legacy per-collection override.
pub async fn upsert_override(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
    schema: &OverrideSchema,
) -> Result<Override> {
    let url = format!(
        "{}/collections/{}/overrides/{}",
        base_url,
        encode_path_segment(collection),
        encode_path_segment(id)
    );
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a legacy override by id. 404 is a typed miss.
pub async fn get_override(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
) -> Result<Option<Override>> {
    let url = format!(
        "{}/collections/{}/overrides/{}",
        base_url,
        encode_path_segment(collection),
        encode_path_segment(id)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// List legacy overrides of a collection. 404 degrades to an empty list on
/// server generations that removed the endpoint.
pub async fn list_overrides(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
) -> Result<Vec<Override>> {
    let url = format!(
        "{}/collections/{}/overrides",
        base_url,
        encode_path_segment(collection)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    if response.status().as_u16() == 404 {
        return Ok(Vec::new());
    }
    let response = expect_success(response).await?;
    let envelope: OverrideListResponse = response.json().await?;
    Ok(envelope.overrides)
}

/// Delete a legacy override by id.
pub async fn delete_override(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
) -> Result<()> {
    let url = format!(
        "{}/collections/{}/overrides/{}",
        base_url,
        encode_path_segment(collection),
        encode_path_segment(id)
    );
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}

/// Upsert a curation set. The body always carries `items`, even when empty.
pub async fn upsert_curation_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
    schema: &CurationSetSchema,
) -> Result<CurationSet> {
    let url = format!("{}/curation_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all curation sets. The response is a bare array.
pub async fn list_curation_sets(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<CurationSet>> {
    let url = format!("{}/curation_sets", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a curation set by name. 404 is a typed miss.
pub async fn get_curation_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<CurationSet>> {
    let url = format!("{}/curation_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete a curation set by name.
pub async fn delete_curation_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<()> {
    let url = format!("{}/curation_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
