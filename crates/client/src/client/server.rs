//! Server debug/health API methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DebugInfo, HealthStatus};

impl TypesenseClient {
    /// Get server debug info (version, state).
    pub async fn debug_info(&self) -> Result<DebugInfo> {
        endpoints::get_debug_info(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get server health.
    pub async fn health(&self) -> Result<HealthStatus> {
        endpoints::get_health(&self.http, &self.base_url, &self.api_key).await
    }
}
