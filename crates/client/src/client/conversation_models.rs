//! Conversation model API methods for [`TypesenseClient`].
//!
//! Same idempotent-upsert contract as NL search models: 409 on create falls
//! back to an update-by-id call.

use tracing::debug;

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{ConversationModel, ConversationModelSchema};

impl TypesenseClient {
    /// Create a conversation model, updating in place when it already exists.
    pub async fn create_conversation_model(
        &self,
        schema: &ConversationModelSchema,
    ) -> Result<ConversationModel> {
        match endpoints::create_conversation_model(&self.http, &self.base_url, &self.api_key, schema)
            .await
        {
            Err(ClientError::ApiError { status: 409, .. }) => {
                let id = schema.id.as_deref().ok_or_else(|| {
                    ClientError::InvalidResponse(
                        "conversation model conflict on create, but no id to update".to_string(),
                    )
                })?;
                debug!(id, "conversation model exists, falling back to update");
                endpoints::update_conversation_model(
                    &self.http,
                    &self.base_url,
                    &self.api_key,
                    id,
                    schema,
                )
                .await
            }
            other => other,
        }
    }

    /// Update a conversation model by id.
    pub async fn update_conversation_model(
        &self,
        id: &str,
        schema: &ConversationModelSchema,
    ) -> Result<ConversationModel> {
        endpoints::update_conversation_model(&self.http, &self.base_url, &self.api_key, id, schema)
            .await
    }

    /// List all conversation models.
    pub async fn list_conversation_models(&self) -> Result<Vec<ConversationModel>> {
        endpoints::list_conversation_models(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get a conversation model by id. Returns `None` when it does not exist.
    pub async fn get_conversation_model(&self, id: &str) -> Result<Option<ConversationModel>> {
        endpoints::get_conversation_model(&self.http, &self.base_url, &self.api_key, id).await
    }

    /// Delete a conversation model by id.
    pub async fn delete_conversation_model(&self, id: &str) -> Result<()> {
        endpoints::delete_conversation_model(&self.http, &self.base_url, &self.api_key, id).await
    }
}
