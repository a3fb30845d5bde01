//! NL search model endpoints.
//!
//! These are the raw calls; the transparent 409-conflict upsert fallback
//! lives in the client layer.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{NlSearchModel, NlSearchModelSchema};

/// Create an NL search model. Conflicts (409) surface as `ApiError`.
pub async fn create_nl_search_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &NlSearchModelSchema,
) -> Result<NlSearchModel> {
    let url = format!("{}/nl_search_models", base_url);
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Update an NL search model by id.
pub async fn update_nl_search_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
    schema: &NlSearchModelSchema,
) -> Result<NlSearchModel> {
    let url = format!("{}/nl_search_models/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all NL search models. The response is a bare array.
pub async fn list_nl_search_models(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<NlSearchModel>> {
    let url = format!("{}/nl_search_models", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get an NL search model by id. 404 is a typed miss.
pub async fn get_nl_search_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<Option<NlSearchModel>> {
    let url = format!("{}/nl_search_models/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete an NL search model by id.
pub async fn delete_nl_search_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<()> {
    let url = format!("{}/nl_search_models/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
