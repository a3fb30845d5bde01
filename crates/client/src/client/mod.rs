//! Main Typesense Server API client and API methods.
//!
//! This module provides the primary [`TypesenseClient`] for interacting with
//! the Typesense Server REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `version`: Server major-version detection and memoization
//! - `collections`, `documents`, `synonyms`, `overrides`, `stopwords`,
//!   `keys`, `aliases`, `presets`, `analytics`, `nl_search_models`,
//!   `conversation_models`, `server`: per-resource API methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Cloud cluster management (see [`crate::cloud`])
//!
//! # Invariants
//! - The client holds no mutable cross-call state except the memoized server
//!   major version, which is computed at most once and only read afterwards.
//! - Every request carries `Content-Type: application/json` and
//!   `X-TYPESENSE-API-KEY`.

pub mod builder;

mod aliases;
mod analytics;
mod collections;
mod conversation_models;
mod documents;
mod keys;
mod nl_search_models;
mod overrides;
mod presets;
mod server;
mod stopwords;
mod synonyms;
mod version;

use secrecy::SecretString;
use tokio::sync::OnceCell;

/// Typesense Server REST API client.
///
/// # Creating a Client
///
/// Use [`TypesenseClient::builder()`]:
///
/// ```rust,ignore
/// use typesense_client::TypesenseClient;
///
/// let client = TypesenseClient::builder()
///     .base_url("http://localhost:8108".to_string())
///     .api_key("xyz".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct TypesenseClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) major_version: OnceCell<u32>,
}

impl TypesenseClient {
    /// Create a new client builder.
    pub fn builder() -> builder::TypesenseClientBuilder {
        builder::TypesenseClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
