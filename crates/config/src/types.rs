//! Connection settings for the Typesense toolkit.

use secrecy::SecretString;
use std::time::Duration;

/// Connection settings for a Typesense server.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Base URL of the server (e.g., `http://localhost:8108`), no trailing slash.
    pub base_url: String,
    /// Admin API key sent as `X-TYPESENSE-API-KEY`.
    pub api_key: SecretString,
    /// Request timeout.
    pub timeout: Duration,
    /// Whether to skip TLS verification (for self-signed certificates).
    pub skip_verify: bool,
}

/// Connection settings for the Typesense Cloud Management API.
#[derive(Debug, Clone)]
pub struct CloudSettings {
    /// Base URL of the management API, no trailing slash.
    pub base_url: String,
    /// Management API key sent as `X-TYPESENSE-CLOUD-MANAGEMENT-API-KEY`.
    pub api_key: SecretString,
    /// Request timeout.
    pub timeout: Duration,
}

/// Resolved settings for one invocation.
///
/// At least one of `server` / `cloud` is present; the loader enforces this.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: Option<ServerSettings>,
    pub cloud: Option<CloudSettings>,
}
