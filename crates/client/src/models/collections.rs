//! Collection models for the Typesense collections API.

use serde::{Deserialize, Serialize};

/// HNSW index tuning parameters for a vector field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HnswParams {
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub m: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_construction: Option<u32>,
}

/// Remote embedding model configuration for an auto-embedding field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedModelConfig {
    pub model_name: String,
    /// API key for the embedding provider. Sensitive: the generator never
    /// renders this literally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Auto-embedding configuration: which source fields feed which model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedConfig {
    pub from: Vec<String>,
    pub model_config: EmbedModelConfig,
}

/// A single field in a collection schema.
///
/// Optional flags are pointer-like: absence and `false` are distinct on the
/// wire, so every optional flag round-trips presence, not just value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionField {
    pub name: String,
    /// Absent only in update payloads that drop the field.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infix: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Only meaningful in update payloads: marks the field for removal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_dim: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vec_dist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hnsw_params: Option<HnswParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<EmbedConfig>,
}

impl CollectionField {
    /// Convenience constructor for a plain field with no flags set.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: Some(field_type.into()),
            facet: None,
            optional: None,
            index: None,
            sort: None,
            infix: None,
            stem: None,
            locale: None,
            drop: None,
            num_dim: None,
            vec_dist: None,
            hnsw_params: None,
            embed: None,
        }
    }
}

/// Schema submitted when creating a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionSchema {
    pub name: String,
    pub fields: Vec<CollectionField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sorting_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_separators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols_to_index: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_nested_fields: Option<bool>,
}

/// A collection as returned by the server: the schema plus computed state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub name: String,
    pub fields: Vec<CollectionField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sorting_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_separators: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols_to_index: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_nested_fields: Option<bool>,
    #[serde(default)]
    pub num_documents: u64,
    #[serde(default)]
    pub created_at: i64,
}

impl Collection {
    /// Project the computed state away, leaving the declarative schema.
    pub fn schema(&self) -> CollectionSchema {
        CollectionSchema {
            name: self.name.clone(),
            fields: self.fields.clone(),
            default_sorting_field: self.default_sorting_field.clone(),
            token_separators: self.token_separators.clone(),
            symbols_to_index: self.symbols_to_index.clone(),
            enable_nested_fields: self.enable_nested_fields,
        }
    }
}

/// Partial update payload for `PATCH /collections/{name}`.
///
/// Fields with `drop: true` are removed; the rest are added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionUpdateSchema {
    pub fields: Vec<CollectionField>,
}
