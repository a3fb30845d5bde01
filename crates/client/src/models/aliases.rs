//! Collection alias models.

use serde::{Deserialize, Serialize};

/// An alias pointing at a concrete collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionAlias {
    pub name: String,
    pub collection_name: String,
}

/// Upsert body for `PUT /aliases/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AliasSchema {
    pub collection_name: String,
}

/// Envelope for `GET /aliases`.
#[derive(Debug, Deserialize, Clone)]
pub struct AliasListResponse {
    pub aliases: Vec<CollectionAlias>,
}
