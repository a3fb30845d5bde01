//! Configuration loader for environment variables and CLI overrides.
//!
//! Responsibilities:
//! - Load connection settings from `.env` files and environment variables.
//! - Provide a builder-pattern `SettingsLoader` for hierarchical merging
//!   (env vars first, CLI overrides on top).
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading
//!   in tests.
//!
//! Does NOT handle:
//! - Flag parsing (the CLI owns clap; it feeds values in via `with_*`).
//! - Network validation of credentials.
//!
//! Invariants / Assumptions:
//! - CLI overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - `build()` fails before any network call when the flag combination is
//!   incomplete (host without key, key without host, or no source at all).

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::{
    CLOUD_API_BASE_URL, DEFAULT_PROTOCOL, DEFAULT_TIMEOUT_SECS, DEFAULT_TYPESENSE_PORT,
    MAX_TIMEOUT_SECS,
};
use crate::types::{CloudSettings, ServerSettings, Settings};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("No connection source configured: provide --host and --api-key, or --cloud-api-key")]
    MissingSource,

    #[error("--host and --api-key must be provided together (missing {0})")]
    IncompleteServer(&'static str),

    #[error("Invalid protocol '{0}': expected 'http' or 'https'")]
    InvalidProtocol(String),

    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Timeout of {0}s exceeds the maximum of {MAX_TIMEOUT_SECS}s")]
    TimeoutTooLarge(u64),

    #[error("Source directory does not exist: {0}")]
    SourceDirMissing(std::path::PathBuf),
}

/// Read an environment variable, treating empty values as unset.
pub fn env_var_or_none(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Settings loader that merges environment variables and CLI overrides.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    host: Option<String>,
    port: Option<u16>,
    protocol: Option<String>,
    api_key: Option<SecretString>,
    cloud_api_key: Option<SecretString>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
}

impl SettingsLoader {
    /// Create a new, empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Self {
        let disabled = std::env::var("DOTENV_DISABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        if !disabled {
            dotenvy::dotenv().ok();
        }
        self
    }

    /// Read settings from `TYPESENSE_*` environment variables.
    ///
    /// Values already set on the loader are not overwritten, so CLI overrides
    /// applied before this call win.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.host.is_none() {
            self.host = env_var_or_none("TYPESENSE_HOST");
        }
        if self.port.is_none() {
            if let Some(raw) = env_var_or_none("TYPESENSE_PORT") {
                let port = raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                    var: "TYPESENSE_PORT".to_string(),
                    message: e.to_string(),
                })?;
                self.port = Some(port);
            }
        }
        if self.protocol.is_none() {
            self.protocol = env_var_or_none("TYPESENSE_PROTOCOL");
        }
        if self.api_key.is_none() {
            self.api_key = env_var_or_none("TYPESENSE_API_KEY").map(|v| SecretString::new(v.into()));
        }
        if self.cloud_api_key.is_none() {
            self.cloud_api_key =
                env_var_or_none("TYPESENSE_CLOUD_API_KEY").map(|v| SecretString::new(v.into()));
        }
        if self.timeout.is_none() {
            if let Some(raw) = env_var_or_none("TYPESENSE_TIMEOUT") {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    var: "TYPESENSE_TIMEOUT".to_string(),
                    message: e.to_string(),
                })?;
                self.timeout = Some(Duration::from_secs(secs));
            }
        }
        Ok(self)
    }

    /// Set the server host.
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the server protocol ("http" or "https").
    pub fn with_protocol(mut self, protocol: String) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Set the server API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the cloud management API key.
    pub fn with_cloud_api_key(mut self, key: String) -> Self {
        self.cloud_api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Resolve the loader into validated [`Settings`].
    ///
    /// Fails when neither a server source (host + API key) nor a cloud source
    /// (management API key) is configured, or when a server source is only
    /// half-configured.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::TimeoutTooLarge(timeout.as_secs()));
        }

        let server = match (self.host, self.api_key) {
            (Some(host), Some(api_key)) => {
                let protocol = self
                    .protocol
                    .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
                if protocol != "http" && protocol != "https" {
                    return Err(ConfigError::InvalidProtocol(protocol));
                }
                let port = self.port.unwrap_or(DEFAULT_TYPESENSE_PORT);
                let base_url = format!("{}://{}:{}", protocol, host.trim_end_matches('/'), port);
                Url::parse(&base_url).map_err(|e| ConfigError::InvalidUrl {
                    url: base_url.clone(),
                    message: e.to_string(),
                })?;
                Some(ServerSettings {
                    base_url,
                    api_key,
                    timeout,
                    skip_verify: self.skip_verify.unwrap_or(false),
                })
            }
            (Some(_), None) => return Err(ConfigError::IncompleteServer("--api-key")),
            (None, Some(_)) => return Err(ConfigError::IncompleteServer("--host")),
            (None, None) => None,
        };

        let cloud = self.cloud_api_key.map(|api_key| CloudSettings {
            base_url: CLOUD_API_BASE_URL.to_string(),
            api_key,
            timeout,
        });

        if server.is_none() && cloud.is_none() {
            return Err(ConfigError::MissingSource);
        }

        Ok(Settings { server, cloud })
    }
}
