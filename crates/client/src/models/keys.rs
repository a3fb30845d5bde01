//! API key models.
//!
//! The plaintext key `value` is returned exactly once, in the creation
//! response. Subsequent reads carry only `value_prefix`. Nothing in this
//! crate re-requests or reconstructs the value.

use serde::{Deserialize, Serialize};

/// Creation body for `POST /keys`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiKeySchema {
    pub description: String,
    pub actions: Vec<String>,
    pub collections: Vec<String>,
    /// Caller-supplied key value; when absent the server generates one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// An API key as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiKey {
    pub id: u64,
    #[serde(default)]
    pub description: String,
    pub actions: Vec<String>,
    pub collections: Vec<String>,
    /// Only present in the creation response. Non-recoverable afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

/// Envelope for `GET /keys`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiKeyListResponse {
    pub keys: Vec<ApiKey>,
}
