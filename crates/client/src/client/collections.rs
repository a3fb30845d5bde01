//! Collection management API methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Collection, CollectionSchema, CollectionUpdateSchema};

impl TypesenseClient {
    /// Create a collection.
    pub async fn create_collection(&self, schema: &CollectionSchema) -> Result<Collection> {
        endpoints::create_collection(&self.http, &self.base_url, &self.api_key, schema).await
    }

    /// List all collections.
    pub async fn list_collections(&self) -> Result<Vec<Collection>> {
        endpoints::list_collections(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a collection by name. Returns `None` when it does not exist.
    pub async fn get_collection(&self, name: &str) -> Result<Option<Collection>> {
        endpoints::get_collection(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Apply a partial schema update (add/drop fields).
    pub async fn update_collection(
        &self,
        name: &str,
        update: &CollectionUpdateSchema,
    ) -> Result<CollectionUpdateSchema> {
        endpoints::update_collection(&self.http, &self.base_url, &self.api_key, name, update).await
    }

    /// Delete a collection by name.
    pub async fn delete_collection(&self, name: &str) -> Result<Collection> {
        endpoints::delete_collection(&self.http, &self.base_url, &self.api_key, name).await
    }
}
