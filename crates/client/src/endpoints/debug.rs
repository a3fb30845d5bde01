//! Server debug/health endpoints.

use reqwest::{Client, Method};
use secrecy::SecretString;

use crate::endpoints::{expect_success, json_request};
use crate::error::Result;
use crate::models::{DebugInfo, HealthStatus};

/// Get server debug info (version, state).
pub async fn get_debug_info(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<DebugInfo> {
    let url = format!("{}/debug", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}

/// Get server health.
pub async fn get_health(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
) -> Result<HealthStatus> {
    let url = format!("{}/health", base_url);
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let response = expect_success(response).await?;
    Ok(response.json().await?)
}
