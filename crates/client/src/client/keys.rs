//! API key management methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiKey, ApiKeySchema};

impl TypesenseClient {
    /// Create an API key. The returned key carries the plaintext value
    /// exactly once; it is not recoverable afterwards.
    pub async fn create_key(&self, schema: &ApiKeySchema) -> Result<ApiKey> {
        endpoints::create_key(&self.http, &self.base_url, &self.api_key, schema).await
    }

    /// List all API keys (values redacted to prefixes).
    pub async fn list_keys(&self) -> Result<Vec<ApiKey>> {
        endpoints::list_keys(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get an API key by numeric id. Returns `None` when it does not exist.
    pub async fn get_key(&self, id: u64) -> Result<Option<ApiKey>> {
        endpoints::get_key(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Delete an API key by numeric id.
    pub async fn delete_key(&self, id: u64) -> Result<()> {
        endpoints::delete_key(&self.http, &self.base_url, &self.api_key, id).await
    }
}
