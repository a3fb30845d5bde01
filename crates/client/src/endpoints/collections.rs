//! Collection management endpoints.

use reqwest::{Client, Method};
use secrecy::SecretString;
use tracing::debug;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{Collection, CollectionSchema, CollectionUpdateSchema};

/// Create a collection.
pub async fn create_collection(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &CollectionSchema,
) -> Result<Collection> {
    let url = format!("{}/collections", base_url);
    debug!(collection = %schema.name, "creating collection");
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all collections. The response is a bare array, no envelope.
pub async fn list_collections(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<Collection>> {
    let url = format!("{}/collections", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a collection by name. 404 is a typed miss, not an error.
pub async fn get_collection(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<Collection>> {
    let url = format!("{}/collections/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Apply a partial schema update (add/drop fields).
pub async fn update_collection(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
    update: &CollectionUpdateSchema,
) -> Result<CollectionUpdateSchema> {
    let url = format!("{}/collections/{}", base_url, encode_path_segment(name));
    debug!(collection = %name, fields = update.fields.len(), "updating collection schema");
    let response = json_request(http, Method::PATCH, &url, api_key)
        .json(update)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Delete a collection by name. Returns the deleted collection.
pub async fn delete_collection(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Collection> {
    let url = format!("{}/collections/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}
