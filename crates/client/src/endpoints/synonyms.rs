//! Synonym endpoints: legacy per-collection synonyms (server < 30) and
//! synonym sets (server >= 30).
//!
//! The legacy list endpoint is version-retired: servers >= 30 return 404 for
//! it, which callers must see as "zero items", not failure.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{Synonym, SynonymListResponse, SynonymSchema, SynonymSet, SynonymSetSchema};

/// Upsert a legacy per-collection synonym.
pub async fn upsert_synonym(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
    schema: &SynonymSchema,
) -> Result<Synonym> {
    let url = format!(
        "{}/collections/{}/synonyms/{}",
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

/// Get a legacy synonym by id. 404 is a typed miss.
pub async fn get_synonym(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
) -> Result<Option<Synonym>> {
    let url = format!(
        "{}/collections/{}/synonyms/{}",
        base_url,
        encode_path_segment(collection),
        encode_path_segment(id)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// List legacy synonyms of a collection.
///
/// 404 means the endpoint no longer exists on this server generation;
/// that degrades gracefully to an empty list.
pub async fn list_synonyms(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
) -> Result<Vec<Synonym>> {
    let url = format!(
        "{}/collections/{}/synonyms",
        base_url,
        encode_path_segment(collection)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    if response.status().as_u16() == 404 {
        return Ok(Vec::new());
    }
    let response = expect_success(response).await?;
    let envelope: SynonymListResponse = response.json().await?;
    Ok(envelope.synonyms)
}

/// Delete a legacy synonym by id.
pub async fn delete_synonym(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    id: &str,
) -> Result<()> {
    let url = format!(
        "{}/collections/{}/synonyms/{}",
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

/// Upsert a synonym set. The body always carries `items`, even when empty.
pub async fn upsert_synonym_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
    schema: &SynonymSetSchema,
) -> Result<SynonymSet> {
    let url = format!("{}/synonym_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(schema)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all synonym sets. The response is a bare array.
pub async fn list_synonym_sets(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<SynonymSet>> {
    let url = format!("{}/synonym_sets", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get a synonym set by name. 404 is a typed miss.
pub async fn get_synonym_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<SynonymSet>> {
    let url = format!("{}/synonym_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete a synonym set by name.
pub async fn delete_synonym_set(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<()> {
    let url = format!("{}/synonym_sets/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
