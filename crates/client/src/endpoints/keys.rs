//! API key endpoints.
//!
//! The creation response is the only place the plaintext key value ever
//! appears; it cannot be re-requested.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, expect_success, json_request};
use crate::error::Result;
use crate::models::{ApiKey, ApiKeyListResponse, ApiKeySchema};

/// Create an API key. The returned key carries the plaintext `value`
/// exactly once.
pub async fn create_key(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &ApiKeySchema,
) -> Result<ApiKey> {
    let url = format!("{}/keys", base_url);
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all API keys. Enveloped as `{"keys": [...]}`; values are redacted to
/// prefixes by the server.
pub async fn list_keys(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<ApiKey>> {
    let url = format!("{}/keys", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    let envelope: ApiKeyListResponse = response.json().await?;
    Ok(envelope.keys)
}

/// Get an API key by numeric id. 404 is a typed miss.
pub async fn get_key(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: u64,
) -> Result<Option<ApiKey>> {
    let url = format!("{}/keys/{}", base_url, id);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete an API key by numeric id.
pub async fn delete_key(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: u64,
) -> Result<()> {
    let url = format!("{}/keys/{}", base_url, id);
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
