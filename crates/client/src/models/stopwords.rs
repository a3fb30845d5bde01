//! Stopwords set models. Stopwords sets are global, not per-collection.

use serde::{Deserialize, Serialize};

/// A named stopwords set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopwordsSet {
    pub id: String,
    pub stopwords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Upsert body for `PUT /stopwords/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StopwordsSetSchema {
    pub stopwords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Envelope for `GET /stopwords`.
#[derive(Debug, Deserialize, Clone)]
pub struct StopwordsListResponse {
    pub stopwords: Vec<StopwordsSet>,
}

/// Envelope for `GET /stopwords/{id}`: the single-get is wrapped too.
#[derive(Debug, Deserialize, Clone)]
pub struct StopwordsGetResponse {
    pub stopwords: StopwordsSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_parses() {
        let raw = serde_json::json!({
            "stopwords": [
                {"id": "common_en", "stopwords": ["a", "the"], "locale": "en"},
                {"id": "common_de", "stopwords": ["der", "die", "das"]}
            ]
        });
        let parsed: StopwordsListResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.stopwords.len(), 2);
        assert_eq!(parsed.stopwords[0].locale.as_deref(), Some("en"));
        assert!(parsed.stopwords[1].locale.is_none());
    }

    #[test]
    fn single_get_envelope_parses() {
        let raw = serde_json::json!({
            "stopwords": {"id": "common_en", "stopwords": ["a", "the"], "locale": "en"}
        });
        let parsed: StopwordsGetResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.stopwords.id, "common_en");
    }
}
