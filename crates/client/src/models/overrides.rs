//! Override (curation) models: the legacy per-collection form (server < 30)
//! and the curation-set form that replaced it (server >= 30).

use serde::{Deserialize, Serialize};

/// The rule part of an override: what queries or tags it applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// `exact` or `contains`; only meaningful alongside `query`.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
}

/// A document pinned to a position by an override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideInclude {
    pub id: String,
    pub position: u32,
}

/// A document excluded from results by an override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideExclude {
    pub id: String,
}

/// A legacy per-collection override, or one entry of a curation set.
///
/// The wire shape of a curation-set item is identical to the legacy override,
/// so the same type serves both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Override {
    pub id: String,
    pub rule: OverrideRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<OverrideInclude>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<OverrideExclude>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_matched_tokens: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_curated_hits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_processing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Upsert body for `PUT /collections/{collection}/overrides/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideSchema {
    pub rule: OverrideRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<OverrideInclude>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excludes: Option<Vec<OverrideExclude>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_matched_tokens: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_curated_hits: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_processing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Envelope for `GET /collections/{collection}/overrides`.
#[derive(Debug, Deserialize, Clone)]
pub struct OverrideListResponse {
    pub overrides: Vec<Override>,
}

/// One entry inside a curation set; same wire shape as a legacy override.
pub type CurationItem = Override;

/// A named curation set as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurationSet {
    pub name: String,
    /// Wire field is `items`. Always present, even when empty.
    #[serde(default)]
    pub items: Vec<CurationItem>,
}

/// Upsert body for `PUT /curation_sets/{name}`.
///
/// `items` must serialize even when the list is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurationSetSchema {
    pub items: Vec<CurationItem>,
}
