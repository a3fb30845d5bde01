//! Override (curation) API methods for [`TypesenseClient`]: legacy
//! per-collection overrides and server >= 30 curation sets.

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CurationSet, CurationSetSchema, Override, OverrideSchema};

impl TypesenseClient {
    /// Upsert a legacy per-collection override.
    pub async fn upsert_override(
        &self,
        collection: &str,
        id: &str,
        schema: &OverrideSchema,
    ) -> Result<Override> {
        endpoints::upsert_override(&self.http, &self.base_url, &self.api_key, collection, id, schema)
            .await
    }

    /// Get a legacy override. Returns `None` when it does not exist.
    pub async fn get_override(&self, collection: &str, id: &str) -> Result<Option<Override>> {
        endpoints::get_override(&self.http, &self.base_url, &self.api_key, collection, id).await
    }

    /// List legacy overrides of a collection. Yields an empty list on server
    /// generations that removed the endpoint.
    pub async fn list_overrides(&self, collection: &str) -> Result<Vec<Override>> {
        endpoints::list_overrides(&self.http, &self.base_url, &self.api_key, collection).await
    }

    /// Delete a legacy override.
    pub async fn delete_override(&self, collection: &str, id: &str) -> Result<()> {
        endpoints::delete_override(&self.http, &self.base_url, &self.api_key, collection, id).await
    }

    /// Upsert a curation set.
    pub async fn upsert_curation_set(
        &self,
        name: &str,
        schema: &CurationSetSchema,
    ) -> Result<CurationSet> {
        endpoints::upsert_curation_set(&self.http, &self.base_url, &self.api_key, name, schema)
            .await
    }

    /// List all curation sets.
    pub async fn list_curation_sets(&self) -> Result<Vec<CurationSet>> {
        endpoints::list_curation_sets(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a curation set by name. Returns `None` when it does not exist.
    pub async fn get_curation_set(&self, name: &str) -> Result<Option<CurationSet>> {
        endpoints::get_curation_set(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Delete a curation set by name.
    pub async fn delete_curation_set(&self, name: &str) -> Result<()> {
        endpoints::delete_curation_set(&self.http, &self.base_url, &self.api_key, name).await
    }
}
