//! Stopwords set API methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{StopwordsSet, StopwordsSetSchema};

impl TypesenseClient {
    /// Upsert a stopwords set.
    pub async fn upsert_stopwords_set(
        &self,
        id: &str,
        schema: &StopwordsSetSchema,
    ) -> Result<StopwordsSet> {
        endpoints::upsert_stopwords_set(&self.http, &self.base_url, &self.api_key, id, schema).await
    }

    /// List all stopwords sets.
    pub async fn list_stopwords_sets(&self) -> Result<Vec<StopwordsSet>> {
        endpoints::list_stopwords_sets(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a stopwords set by id. Returns `None` when it does not exist.
    pub async fn get_stopwords_set(&self, id: &str) -> Result<Option<StopwordsSet>> {
        endpoints::get_stopwords_set(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Delete a stopwords set by id.
    pub async fn delete_stopwords_set(&self, id: &str) -> Result<()> {
        endpoints::delete_stopwords_set(&self.http, &self.base_url, &self.api_key, id).await
    }
}
