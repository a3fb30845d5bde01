//! Typed request/response models for the Typesense Server API.
//!
//! Every list endpoint's envelope (or lack of one) is recorded next to the
//! response type it wraps; callers must not guess per-endpoint shapes.

mod aliases;
mod analytics;
mod collections;
mod conversation_models;
mod documents;
mod keys;
mod nl_search_models;
mod overrides;
mod presets;
mod server;
mod stopwords;
mod synonyms;

pub use aliases::{AliasListResponse, AliasSchema, CollectionAlias};
pub use analytics::{
    AnalyticsRule, AnalyticsRuleListResponse, AnalyticsRuleSchema, upsert_payload,
};
pub use collections::{
    Collection, CollectionField, CollectionSchema, CollectionUpdateSchema, EmbedConfig,
    EmbedModelConfig, HnswParams,
};
pub use conversation_models::{ConversationModel, ConversationModelSchema};
pub use documents::{ImportAction, ImportSummary};
pub use keys::{ApiKey, ApiKeyListResponse, ApiKeySchema};
pub use nl_search_models::{NlSearchModel, NlSearchModelSchema};
pub use overrides::{
    CurationItem, CurationSet, CurationSetSchema, Override, OverrideExclude, OverrideInclude,
    OverrideListResponse, OverrideRule, OverrideSchema,
};
pub use presets::{Preset, PresetListResponse, PresetSchema};
pub use server::{DebugInfo, HealthStatus};
pub use stopwords::{
    StopwordsGetResponse, StopwordsListResponse, StopwordsSet, StopwordsSetSchema,
};
pub use synonyms::{
    Synonym, SynonymItem, SynonymListResponse, SynonymSchema, SynonymSet, SynonymSetSchema,
};
