//! Collection alias API methods for [`TypesenseClient`].

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AliasSchema, CollectionAlias};

impl TypesenseClient {
    /// Upsert an alias.
    pub async fn upsert_alias(&self, name: &str, schema: &AliasSchema) -> Result<CollectionAlias> {
        endpoints::upsert_alias(&self.http, &self.base_url, &self.api_key, name, schema).await
    }

    /// List all aliases.
    pub async fn list_aliases(&self) -> Result<Vec<CollectionAlias>> {
        endpoints::list_aliases(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get an alias by name. Returns `None` when it does not exist.
    pub async fn get_alias(&self, name: &str) -> Result<Option<CollectionAlias>> {
        endpoints::get_alias(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Delete an alias by name.
    pub async fn delete_alias(&self, name: &str) -> Result<()> {
        endpoints::delete_alias(&self.http, &self.base_url, &self.api_key, name).await
    }
}
