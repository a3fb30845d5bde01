//! Collection alias endpoints.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{AliasListResponse, AliasSchema, CollectionAlias};

/// Upsert an alias.
pub async fn upsert_alias(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
    schema: &AliasSchema,
) -> Result<CollectionAlias> {
    let url = format!("{}/aliases/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all aliases. Enveloped as `{"aliases": [...]}`.
pub async fn list_aliases(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<CollectionAlias>> {
    let url = format!("{}/aliases", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    let envelope: AliasListResponse = response.json().await?;
    Ok(envelope.aliases)
}

/// Get an alias by name. 404 is a typed miss.
pub async fn get_alias(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<CollectionAlias>> {
    let url = format!("{}/aliases/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete an alias by name.
pub async fn delete_alias(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<()> {
    let url = format!("{}/aliases/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
