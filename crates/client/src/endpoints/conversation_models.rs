//! Conversation model endpoints.
//!
//! Raw calls only; the 409-conflict upsert fallback lives in the client
//! layer, mirroring NL search models.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{ConversationModel, ConversationModelSchema};

/// Create a conversation model. Conflicts (409) surface as `ApiError`.
pub async fn create_conversation_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &ConversationModelSchema,
) -> Result<ConversationModel> {
    let url = format!("{}/conversations/models", base_url);
    let response = json_request(http, Method::POST, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Update a conversation model by id.
pub async fn update_conversation_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
    schema: &ConversationModelSchema,
) -> Result<ConversationModel> {
    let url = format!(
        "{}/conversations/models/{}",
        base_url,
        encode_path_segment(id)
    );
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all conversation models. The response is a bare array.
pub async fn list_conversation_models(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<ConversationModel>> {
    let url = format!("{}/conversations/models", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a conversation model by id. 404 is a typed miss.
pub async fn get_conversation_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<Option<ConversationModel>> {
    let url = format!(
        "{}/conversations/models/{}",
        base_url,
        encode_path_segment(id)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete a conversation model by id.
pub async fn delete_conversation_model(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<()> {
    let url = format!(
        "{}/conversations/models/{}",
        base_url,
        encode_path_segment(id)
    );
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
