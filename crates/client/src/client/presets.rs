//! Search preset API methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Preset, PresetSchema};

impl TypesenseClient {
    /// Upsert a preset.
    pub async fn upsert_preset(&self, name: &str, schema: &PresetSchema) -> Result<Preset> {
        endpoints::upsert_preset(&self.http, &self.base_url, &self.api_key, name, schema).await
    }

    /// List all presets.
    pub async fn list_presets(&self) -> Result<Vec<Preset>> {
        endpoints::list_presets(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a preset by name. Returns `None` when it does not exist.
    pub async fn get_preset(&self, name: &str) -> Result<Option<Preset>> {
        endpoints::get_preset(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Delete a preset by name.
    pub async fn delete_preset(&self, name: &str) -> Result<()> {
        endpoints::delete_preset(&self.http, &self.base_url, &self.api_key, name).await
    }
}
