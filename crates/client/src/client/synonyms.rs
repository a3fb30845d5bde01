//! Synonym API methods for [`TypesenseClient`]: legacy per-collection
//! synonyms and server >= 30 synonym sets.

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Synonym, SynonymSchema, SynonymSet, SynonymSetSchema};

impl TypesenseClient {
    /// Upsert a legacy per-collection synonym.
    pub async fn upsert_synonym(
        &self,
        collection: &str,
        id: &str,
        schema: &SynonymSchema,
    ) -> Result<Synonym> {
        endpoints::upsert_synonym(&self.http, &self.base_url, &self.api_key, collection, id, schema)
            .await
    }

    /// Get a legacy synonym. Returns `None` when it does not exist.
    pub async fn get_synonym(&self, collection: &str, id: &str) -> Result<Option<Synonym>> {
        endpoints::get_synonym(&self.http, &self.base_url, &self.api_key, collection, id).await
    }

    /// List legacy synonyms of a collection. Yields an empty list on server
    /// generations that removed the endpoint.
    pub async fn list_synonyms(&self, collection: &str) -> Result<Vec<Synonym>> {
        endpoints::list_synonyms(&self.http, &self.base_url, &self.api_key, collection).await
    }

    /// Delete a legacy synonym.
    pub async fn delete_synonym(&self, collection: &str, id: &str) -> Result<()> {
        endpoints::delete_synonym(&self.http, &self.base_url, &self.api_key, collection, id).await
    }

    /// Upsert a synonym set.
    pub async fn upsert_synonym_set(
        &self,
        name: &str,
        schema: &SynonymSetSchema,
    ) -> Result<SynonymSet> {
        endpoints::upsert_synonym_set(&self.http, &self.base_url, &self.api_key, name, schema).await
    }

    /// List all synonym sets.
    pub async fn list_synonym_sets(&self) -> Result<Vec<SynonymSet>> {
        endpoints::list_synonym_sets(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a synonym set by name. Returns `None` when it does not exist.
    pub async fn get_synonym_set(&self, name: &str) -> Result<Option<SynonymSet>> {
        endpoints::get_synonym_set(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Delete a synonym set by name.
    pub async fn delete_synonym_set(&self, name: &str) -> Result<()> {
        endpoints::delete_synonym_set(&self.http, &self.base_url, &self.api_key, name).await
    }
}
