//! Analytics rule API methods for [`TypesenseClient`].
//!
//! The upsert payload shape follows the detected server generation; the
//! generation is resolved once per client and applied uniformly here.

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AnalyticsRule, AnalyticsRuleSchema};

impl TypesenseClient {
    /// Upsert an analytics rule, shaping the payload for the server's
    /// detected generation.
    pub async fn upsert_analytics_rule(
        &self,
        schema: &AnalyticsRuleSchema,
    ) -> Result<AnalyticsRule> {
        let generation = self.api_generation().await;
        endpoints::upsert_analytics_rule(
            &self.http,
            &self.base_url,
            &self.api_key,
            schema,
            generation,
        )
        .await
    }

    /// List all analytics rules.
    pub async fn list_analytics_rules(&self) -> Result<Vec<AnalyticsRule>> {
        endpoints::list_analytics_rules(&self.http, &self.base_url, &self.api_key).await
    }

    /// Get an analytics rule by name. Returns `None` when it does not exist.
    pub async fn get_analytics_rule(&self, name: &str) -> Result<Option<AnalyticsRule>> {
        endpoints::get_analytics_rule(&self.http, &self.base_url, &self.api_key, name).await
    }

    /// Delete an analytics rule by name.
    pub async fn delete_analytics_rule(&self, name: &str) -> Result<()> {
        endpoints::delete_analytics_rule(&self.http, &self.base_url, &self.api_key, name).await
    }
}
