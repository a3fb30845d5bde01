//! Stopwords set endpoints. Stopwords sets are global resources.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{
    StopwordsGetResponse, StopwordsListResponse, StopwordsSet, StopwordsSetSchema,
};

/// Upsert a stopwords set.
pub async fn upsert_stopwords_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
    schema: &StopwordsSetSchema,
) -> Result<StopwordsSet> {
    let url = format!("{}/stopwords/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all stopwords sets. Enveloped as `{"stopwords": [...]}`.
pub async fn list_stopwords_sets(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<StopwordsSet>> {
    let url = format!("{}/stopwords", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    let envelope: StopwordsListResponse = response.json().await?;
    Ok(envelope.stopwords)
}

/// Get a stopwords set by id; the single-get is enveloped too. 404 is a
/// typed miss.
pub async fn get_stopwords_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<Option<StopwordsSet>> {
    let url = format!("{}/stopwords/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    if response.status().as_u16() == 404 {
        return Ok(None);
    }
    let response = expect_success(response).await?;
    let envelope: StopwordsGetResponse = response.json().await?;
    Ok(Some(envelope.stopwords))
}

/// Delete a stopwords set by id.
pub async fn delete_stopwords_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    id: &str,
) -> Result<()> {
    let url = format!("{}/stopwords/{}", base_url, encode_path_segment(id));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
