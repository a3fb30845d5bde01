//! Override (curation) endpoint tests: legacy per-collection overrides and
//! curation sets.
//!
//! # Invariants
//! - Legacy list responses are enveloped as `{"overrides": [...]}`.
//! - 404 on the legacy list endpoint degrades to an empty list.
//! - Curation-set upsert bodies always carry an `items` key, even empty.

mod common;

use common::*;
use typesense_client::models::{
    CurationSetSchema, OverrideInclude, OverrideRule, OverrideSchema,
};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_overrides_envelope() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("overrides/list_overrides.json");

    Mock::given(method("GET"))
        .and(path("/collections/products/overrides"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let overrides =
        endpoints::list_overrides(&client, &mock_server.uri(), &api_key("test-key"), "products")
            .await
            .unwrap();

    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].id, "pin-sale");
    assert_eq!(overrides[0].rule.match_type.as_deref(), Some("exact"));
    assert_eq!(overrides[0].stop_processing, Some(true));
}

#[tokio::test]
async fn test_list_overrides_404_degrades_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/products/overrides"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let overrides =
        endpoints::list_overrides(&client, &mock_server.uri(), &api_key("test-key"), "products")
            .await
            .unwrap();

    assert!(overrides.is_empty());
}

#[tokio::test]
async fn test_upsert_override() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("overrides/upsert_override.json");

    Mock::given(method("PUT"))
        .and(path("/collections/products/overrides/pin-sale"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let schema = OverrideSchema {
        rule: OverrideRule {
            query: Some("sale".to_string()),
            match_type: Some("exact".to_string()),
            tags: None,
            filter_by: None,
        },
        includes: Some(vec![OverrideInclude {
            id: "42".to_string(),
            position: 1,
        }]),
        excludes: None,
        filter_by: None,
        sort_by: None,
        replace_query: None,
        remove_matched_tokens: None,
        filter_curated_hits: None,
        effective_from_ts: None,
        effective_to_ts: None,
        stop_processing: Some(true),
        metadata: None,
    };

    let client = Client::new();
    let entry = endpoints::upsert_override(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        "pin-sale",
        &schema,
    )
    .await
    .unwrap();

    assert_eq!(entry.id, "pin-sale");
    assert_eq!(entry.includes.as_ref().unwrap()[0].position, 1);
}

#[tokio::test]
async fn test_upsert_curation_set_wire_shape() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("overrides/curation_set.json");

    Mock::given(method("PUT"))
        .and(path("/curation_sets/seasonal"))
        .and(body_json(serde_json::json!({
            "items": [{
                "id": "pin-sale",
                "rule": {"query": "sale", "match": "exact"},
                "includes": [{"id": "42", "position": 1}]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let item: typesense_client::models::CurationItem = serde_json::from_value(serde_json::json!({
        "id": "pin-sale",
        "rule": {"query": "sale", "match": "exact"},
        "includes": [{"id": "42", "position": 1}]
    }))
    .unwrap();

    let client = Client::new();
    let set = endpoints::upsert_curation_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "seasonal",
        &CurationSetSchema { items: vec![item] },
    )
    .await
    .unwrap();

    assert_eq!(set.name, "seasonal");
    assert_eq!(set.items.len(), 1);
}

#[tokio::test]
async fn test_upsert_empty_curation_set_still_sends_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/curation_sets/empty"))
        .and(body_json(serde_json::json!({"items": []})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"name": "empty", "items": []})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::upsert_curation_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "empty",
        &CurationSetSchema { items: vec![] },
    )
    .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_curation_sets_bare_array() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("overrides/list_curation_sets.json");

    Mock::given(method("GET"))
        .and(path("/curation_sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let sets = endpoints::list_curation_sets(&client, &mock_server.uri(), &api_key("test-key"))
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].items[0].rule.tags.as_ref().unwrap()[0], "summer");
}
