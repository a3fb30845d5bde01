//! Stopwords set endpoint tests.
//!
//! # Invariants
//! - The list response is enveloped as `{"stopwords": [...]}`; the single
//!   get is enveloped as `{"stopwords": {...}}`.

mod common;

use common::*;
use typesense_client::models::StopwordsSetSchema;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_list_stopwords_sets() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("stopwords/list_stopwords.json");

    Mock::given(method("GET"))
        .and(path("/stopwords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let sets = endpoints::list_stopwords_sets(&client, &mock_server.uri(), &api_key("test-key"))
        .await
        .unwrap();

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].id, "common_en");
    assert_eq!(sets[0].locale.as_deref(), Some("en"));
    assert!(sets[1].locale.is_none());
}

#[tokio::test]
async fn test_get_stopwords_set_unwraps_envelope() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("stopwords/get_stopwords.json");

    Mock::given(method("GET"))
        .and(path("/stopwords/common_en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let set = endpoints::get_stopwords_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "common_en",
    )
    .await
    .unwrap()
    .expect("set exists");

    assert_eq!(set.id, "common_en");
    assert_eq!(set.stopwords, vec!["a", "an", "the"]);
}

#[tokio::test]
async fn test_get_stopwords_set_404_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stopwords/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::get_stopwords_set(&client, &mock_server.uri(), &api_key("test-key"), "ghost")
            .await
            .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_upsert_stopwords_set() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("stopwords/upsert_stopwords.json");

    Mock::given(method("PUT"))
        .and(path("/stopwords/common_en"))
        .and(body_json(serde_json::json!({
            "stopwords": ["a", "an", "the"],
            "locale": "en"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let schema = StopwordsSetSchema {
        stopwords: vec!["a".to_string(), "an".to_string(), "the".to_string()],
        locale: Some("en".to_string()),
    };

    let client = Client::new();
    let set = endpoints::upsert_stopwords_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "common_en",
        &schema,
    )
    .await
    .unwrap();

    assert_eq!(set.id, "common_en");
}

#[tokio::test]
async fn test_delete_stopwords_set() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/stopwords/common_en"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "common_en"})),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::delete_stopwords_set(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "common_en",
    )
    .await;

    assert!(result.is_ok());
}
