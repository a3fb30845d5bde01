//! Synonym endpoint tests: legacy per-collection synonyms and synonym sets.
//!
//! # Invariants
//! - Legacy list responses are enveloped as `{"synonyms": [...]}`.
//! - 404 on the legacy list endpoint degrades to an empty list (servers >=
//!   30 removed the endpoint).
//! - Synonym-set upsert bodies always carry an `items` key, even when the
//!   list is empty, and never a `synonyms` key at the top level.

mod common;

use common::*;
use typesense_client::models::{SynonymItem, SynonymSchema, SynonymSetSchema};
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_synonyms_envelope() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("synonyms/list_synonyms.json");

    Mock::given(method("GET"))
        .and(path("/collections/products/synonyms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let synonyms =
        endpoints::list_synonyms(&client, &mock_server.uri(), &api_key("test-key"), "products")
            .await
            .unwrap();

    assert_eq!(synonyms.len(), 2);
    assert_eq!(synonyms[0].id, "colors");
    assert_eq!(synonyms[1].root.as_deref(), Some("blazer"));
}

#[tokio::test]
async fn test_list_synonyms_404_degrades_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/products/synonyms"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let synonyms =
        endpoints::list_synonyms(&client, &mock_server.uri(), &api_key("test-key"), "products")
            .await
            .unwrap();

    assert!(synonyms.is_empty());
}

#[tokio::test]
async fn test_upsert_synonym() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("synonyms/upsert_synonym.json");

    Mock::given(method("PUT"))
        .and(path("/collections/products/synonyms/colors"))
        .and(body_json(serde_json::json!({"synonyms": ["red", "crimson"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let schema = SynonymSchema {
        synonyms: vec!["red".to_string(), "crimson".to_string()],
        root: None,
        locale: None,
        symbols_to_index: None,
    };

    let client = Client::new();
    let synonym = endpoints::upsert_synonym(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        "colors",
        &schema,
    )
    .await
    .unwrap();

    assert_eq!(synonym.id, "colors");
}

#[tokio::test]
async fn test_upsert_synonym_set_wire_shape() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("synonyms/synonym_set.json");

    // The body must use `items`, not `synonyms`.
    Mock::given(method("PUT"))
        .and(path("/synonym_sets/retail"))
        .and(body_json(serde_json::json!({
            "items": [{"id": "colors", "synonyms": ["red", "crimson"]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let schema = SynonymSetSchema {
        items: vec![SynonymItem {
            id: "colors".to_string(),
            synonyms: vec!["red".to_string(), "crimson".to_string()],
            root: None,
            locale: None,
        }],
    };

    let client = Client::new();
    let set = endpoints::upsert_synonym_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "retail",
        &schema,
    )
    .await
    .unwrap();

    assert_eq!(set.name, "retail");
    assert_eq!(set.items.len(), 1);
}

#[tokio::test]
async fn test_upsert_empty_synonym_set_still_sends_items() {
    let mock_server = MockServer::start().await;

    // An empty set must still serialize the `items` key or the server
    // rejects the request.
    Mock::given(method("PUT"))
        .and(path("/synonym_sets/empty"))
        .and(body_json(serde_json::json!({"items": []})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"name": "empty", "items": []})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let set = endpoints::upsert_synonym_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "empty",
        &SynonymSetSchema { items: vec![] },
    )
    .await
    .unwrap();

    assert!(set.items.is_empty());
}

#[tokio::test]
async fn test_list_synonym_sets_bare_array() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("synonyms/list_synonym_sets.json");

    Mock::given(method("GET"))
        .and(path("/synonym_sets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let sets = endpoints::list_synonym_sets(&client, &mock_server.uri(), &api_key("test-key"))
        .await
        .unwrap();

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].name, "retail");
    assert!(sets[1].items.is_empty());
}

#[tokio::test]
async fn test_delete_synonym() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/collections/products/synonyms/colors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "colors"})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::delete_synonym(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        "colors",
    )
    .await;

    assert!(result.is_ok());
}
