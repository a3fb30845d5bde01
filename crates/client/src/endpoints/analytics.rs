//! Analytics rule endpoints.
//!
//! The upsert payload shape depends on the server generation; the shaping
//! itself lives in `models::analytics::upsert_payload` so it can be tested
//! without a server.

use reqwest::{Client, Method};
use secrecy::SecretString;
use tracing::debug;

use crate::endpoints::{decode_optional, encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{AnalyticsRule, AnalyticsRuleListResponse, AnalyticsRuleSchema, upsert_payload};
use crate::version::ApiGeneration;

/// Upsert an analytics rule, shaping the payload for the server generation.
pub async fn upsert_analytics_rule(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    schema: &AnalyticsRuleSchema,
    generation: ApiGeneration,
) -> Result<AnalyticsRule> {
    let url = format!(
        "{}/analytics/rules/{}",
        base_url,
        encode_path_segment(&schema.name)
    );
    let body = upsert_payload(schema, generation);
    debug!(rule = %schema.name, ?generation, "upserting analytics rule");
    let response = json_request(http, Method::PUT, &url, api_key)
        .json(&body)
        .send()
        .await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// List all analytics rules. Enveloped as `{"rules": [...]}`.
pub async fn list_analytics_rules(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<Vec<AnalyticsRule>> {
    let url = format!("{}/analytics/rules", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    let envelope: AnalyticsRuleListResponse = response.json().await?;
    Ok(envelope.rules)
}

/// Get an analytics rule by name. 404 is a typed miss.
pub async fn get_analytics_rule(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<Option<AnalyticsRule>> {
    let url = format!("{}/analytics/rules/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    decode_optional(response).await
}

/// Delete an analytics rule by name.
pub async fn delete_analytics_rule(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    name: &str,
) -> Result<()> {
    let url = format!("{}/analytics/rules/{}", base_url, encode_path_segment(name));
    let response = json_request(http, Method::DELETE, &url, api_key)
        .send()
        .await?;
    expect_success(response).await?;
    Ok(())
}
