//! Natural-language search model configuration.

use serde::{Deserialize, Serialize};

/// Creation/update body for NL search models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NlSearchModelSchema {
    /// Caller-chosen id; when absent the server assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub model_name: String,
    /// Provider API key. Sensitive: the generator never renders this
    /// literally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// An NL search model as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NlSearchModel {
    pub id: String,
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}
