//! NL search model API methods for [`TypesenseClient`].
//!
//! Creation has idempotent-upsert semantics: a 409 conflict on create falls
//! back transparently to an update-by-id call instead of surfacing the
//! conflict.

use tracing::debug;

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{NlSearchModel, NlSearchModelSchema};

impl TypesenseClient {
    /// Create an NL search model, updating in place when it already exists.
    pub async fn create_nl_search_model(
        &self,
        schema: &NlSearchModelSchema,
    ) -> Result<NlSearchModel> {
        match endpoints::create_nl_search_model(&self.http, &self.base_url, &self.api_key, schema)
            .await
        {
            Err(ClientError::ApiError { status: 409, .. }) => {
                let id = schema.id.as_deref().ok_or_else(|| {
                    ClientError::InvalidResponse(
                        "NL search model conflict on create, but no id to update".to_string(),
                    )
                })?;
                debug!(id, "NL search model exists, falling back to update");
                endpoints::update_nl_search_model(&self.http, &self.base_url, &self.api_key, id, schema)
                    .await
            }
            other => other,
        }
    }

    /// Update an NL search model by id.
    pub async fn update_nl_search_model(
        &self,
        id: &str,
        schema: &NlSearchModelSchema,
    ) -> Result<NlSearchModel> {
        endpoints::update_nl_search_model(&self.http, &self.base_url, &self.api_key, id, schema)
            .await
    }

    /// List all NL search models.
    pub async fn list_nl_search_models(&self) -> Result<Vec<NlSearchModel>> {
        endpoints::list_nl_search_models(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get an NL search model by id. Returns `None` when it does not exist.
    pub async fn get_nl_search_model(&self, id: &str) -> Result<Option<NlSearchModel>> {
        endpoints::get_nl_search_model(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Delete an NL search model by id.
    pub async fn delete_nl_search_model(&self, id: &str) -> Result<()> {
        endpoints::delete_nl_search_model(&self.http, &self.base_url, &self.api_key, id).await
    }
}
