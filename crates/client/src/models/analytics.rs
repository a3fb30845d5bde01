//! Analytics rule models and the version-dependent upsert payload shaping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::version::ApiGeneration;

/// Declarative analytics rule, held in the flat (server >= 30) shape.
///
/// `params` uses the flat key names (`destination_collection`,
/// `counter_field`, `limit`, ...); [`upsert_payload`] reshapes them for
/// legacy servers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsRuleSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub collection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub params: Map<String, Value>,
}

/// An analytics rule as returned by the server. The params shape differs by
/// server generation, so it is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsRule {
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Envelope for `GET /analytics/rules`.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsRuleListResponse {
    pub rules: Vec<AnalyticsRule>,
}

/// Build the upsert body for `PUT /analytics/rules/{name}`.
///
/// Server >= 30 takes the flat shape: top-level `collection`, params with
/// `destination_collection` / `counter_field` as-is. Servers before 30 take
/// no top-level `collection`; instead `params.source.collections` carries
/// the one collection and `params.destination.collection` the destination.
/// Every other params key passes through unchanged.
pub fn upsert_payload(schema: &AnalyticsRuleSchema, generation: ApiGeneration) -> Value {
    match generation {
        ApiGeneration::Current => {
            let mut body = Map::new();
            body.insert("type".to_string(), Value::String(schema.rule_type.clone()));
            body.insert(
                "collection".to_string(),
                Value::String(schema.collection.clone()),
            );
            if let Some(event_type) = &schema.event_type {
                body.insert("event_type".to_string(), Value::String(event_type.clone()));
            }
            body.insert("params".to_string(), Value::Object(schema.params.clone()));
            Value::Object(body)
        }
        ApiGeneration::Legacy => {
            let mut params = Map::new();
            params.insert(
                "source".to_string(),
                json!({ "collections": [schema.collection] }),
            );
            for (key, value) in &schema.params {
                if key == "destination_collection" {
                    params.insert(
                        "destination".to_string(),
                        json!({ "collection": value }),
                    );
                } else {
                    params.insert(key.clone(), value.clone());
                }
            }

            let mut body = Map::new();
            body.insert("type".to_string(), Value::String(schema.rule_type.clone()));
            if let Some(event_type) = &schema.event_type {
                body.insert("event_type".to_string(), Value::String(event_type.clone()));
            }
            body.insert("params".to_string(), Value::Object(params));
            Value::Object(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> AnalyticsRuleSchema {
        let mut params = Map::new();
        params.insert(
            "destination_collection".to_string(),
            json!("product_queries"),
        );
        params.insert("limit".to_string(), json!(1000));
        AnalyticsRuleSchema {
            name: "popular-queries".to_string(),
            rule_type: "popular_queries".to_string(),
            collection: "products".to_string(),
            event_type: None,
            params,
        }
    }

    #[test]
    fn current_payload_is_flat() {
        let body = upsert_payload(&sample_rule(), ApiGeneration::Current);
        assert_eq!(body["collection"], json!("products"));
        assert_eq!(body["params"]["destination_collection"], json!("product_queries"));
        assert_eq!(body["params"]["limit"], json!(1000));
        assert!(body["params"].get("source").is_none());
    }

    #[test]
    fn legacy_payload_nests_source_and_destination() {
        let body = upsert_payload(&sample_rule(), ApiGeneration::Legacy);
        assert!(body.get("collection").is_none());
        assert_eq!(body["params"]["source"]["collections"], json!(["products"]));
        assert_eq!(body["params"]["destination"]["collection"], json!("product_queries"));
        assert!(body["params"].get("destination_collection").is_none());
    }

    #[test]
    fn legacy_payload_passes_other_params_through() {
        let mut rule = sample_rule();
        rule.params.insert("expand_query".to_string(), json!(true));
        let body = upsert_payload(&rule, ApiGeneration::Legacy);
        assert_eq!(body["params"]["limit"], json!(1000));
        assert_eq!(body["params"]["expand_query"], json!(true));
    }

    #[test]
    fn counter_rule_keeps_counter_field_flat_on_current() {
        let mut params = Map::new();
        params.insert("counter_field".to_string(), json!("popularity"));
        let rule = AnalyticsRuleSchema {
            name: "clicks".to_string(),
            rule_type: "counter".to_string(),
            collection: "products".to_string(),
            event_type: Some("click".to_string()),
            params,
        };
        let body = upsert_payload(&rule, ApiGeneration::Current);
        assert_eq!(body["event_type"], json!("click"));
        assert_eq!(body["params"]["counter_field"], json!("popularity"));
    }
}
