//! Search preset models. A preset is an opaque bag of search parameters
//! stored server-side under a name; this client does not interpret it.

use serde::{Deserialize, Serialize};

/// A named search preset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    pub name: String,
    pub value: serde_json::Value,
}

/// Upsert body for `PUT /presets/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetSchema {
    pub value: serde_json::Value,
}

/// Envelope for `GET /presets`.
#[derive(Debug, Deserialize, Clone)]
pub struct PresetListResponse {
    pub presets: Vec<Preset>,
}
