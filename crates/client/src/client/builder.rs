//! Client builder for constructing [`TypesenseClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, api_key)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `base_url` and `api_key` are required and must be provided before
//!   calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; for HTTP URLs it is
//!   accepted and has no effect

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::OnceCell;
use typesense_config::ServerSettings;
use typesense_config::constants::DEFAULT_TIMEOUT_SECS;

use crate::client::TypesenseClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`TypesenseClient`].
pub struct TypesenseClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    timeout: Duration,
    skip_verify: bool,
}

impl Default for TypesenseClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_verify: false,
        }
    }
}

impl TypesenseClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Typesense server, e.g. `http://localhost:8108`.
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the admin API key.
    pub fn api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the admin API key from an existing secret.
    pub fn api_key_secret(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Skip TLS certificate verification (for self-signed certificates).
    ///
    /// # Security Warning
    /// Only use this in development or testing environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<TypesenseClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base URL is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let api_key = self
            .api_key
            .ok_or_else(|| ClientError::InvalidUrl("API key is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.skip_verify)
            .build()?;

        Ok(TypesenseClient {
            http,
            base_url,
            api_key,
            major_version: OnceCell::new(),
        })
    }
}

impl TypesenseClient {
    /// Build a client from resolved [`ServerSettings`].
    pub fn from_settings(settings: &ServerSettings) -> Result<Self> {
        Self::builder()
            .base_url(settings.base_url.clone())
            .api_key(settings.api_key.expose_secret().to_string())
            .timeout(settings.timeout)
            .skip_verify(settings.skip_verify)
            .build()
    }
}
