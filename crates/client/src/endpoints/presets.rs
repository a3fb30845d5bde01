//! Search preset endpoints.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{Preset, PresetListResponse, PresetSchema};

/// Upsert a preset.
pub async fn upsert_preset(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
    schema: &PresetSchema,
) -> Result<Preset> {
    let url = format!("{}/presets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all presets. Enveloped as `{"presets": [...]}`.
pub async fn list_presets(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<Preset>> {
    let url = format!("{}/presets", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    let envelope: PresetListResponse = response.json().await?;
    Ok(envelope.presets)
}

/// Get a preset by name. 404 is a typed miss.
pub async fn get_preset(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<Preset>> {
    let url = format!("{}/presets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete a preset by name.
pub async fn delete_preset(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<()> {
    let url = format!("{}/presets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
