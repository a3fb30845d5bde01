//! Synonym models: the legacy per-collection form (server < 30) and the
//! synonym-set form that replaced it (server >= 30).
//!
//! The two forms are wire-incompatible: legacy synonyms live under
//! `/collections/{collection}/synonyms/{id}`, sets live under
//! `/synonym_sets/{name}` and group their entries under an `items` key.

use serde::{Deserialize, Serialize};

/// A legacy per-collection synonym rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Synonym {
    pub id: String,
    pub synonyms: Vec<String>,
    /// Present for one-way synonyms; absent for multi-way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols_to_index: Option<Vec<String>>,
}

/// Upsert body for `PUT /collections/{collection}/synonyms/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynonymSchema {
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbols_to_index: Option<Vec<String>>,
}

/// Envelope for `GET /collections/{collection}/synonyms`.
#[derive(Debug, Deserialize, Clone)]
pub struct SynonymListResponse {
    pub synonyms: Vec<Synonym>,
}

/// One entry inside a synonym set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynonymItem {
    pub id: String,
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// A named synonym set as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynonymSet {
    pub name: String,
    /// Wire field is `items`. Always present, even when empty; the server
    /// rejects set payloads that omit it.
    #[serde(default)]
    pub items: Vec<SynonymItem>,
}

/// Upsert body for `PUT /synonym_sets/{name}`.
///
/// `items` must serialize even when the list is empty. No
/// `skip_serializing_if` here, deliberately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynonymSetSchema {
    pub items: Vec<SynonymItem>,
}
