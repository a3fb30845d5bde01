//! NL search model and conversation model endpoint tests.
//!
//! # Invariants
//! - Creating a model that already exists (HTTP 409) falls back
//!   transparently to an update-by-id call; the conflict never surfaces.
//! - List responses are bare arrays.

mod common;

use common::*;
use typesense_client::models::{ConversationModelSchema, NlSearchModelSchema};
use wiremock::matchers::{method, path};

fn nl_schema() -> NlSearchModelSchema {
    NlSearchModelSchema {
        id: Some("gpt-helper".to_string()),
        model_name: "openai/gpt-4.1".to_string(),
        api_key: Some("sk-provider-key".to_string()),
        system_prompt: None,
        max_bytes: Some(16384),
        temperature: None,
    }
}

#[tokio::test]
async fn test_create_nl_search_model() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("models/nl_search_model.json");

    Mock::given(method("POST"))
        .and(path("/nl_search_models"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let model = client.create_nl_search_model(&nl_schema()).await.unwrap();

    assert_eq!(model.id, "gpt-helper");
}

#[tokio::test]
async fn test_create_nl_search_model_conflict_falls_back_to_update() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("models/nl_search_model.json");

    Mock::given(method("POST"))
        .and(path("/nl_search_models"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string("{\"message\": \"Model already exists\"}"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/nl_search_models/gpt-helper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let model = client.create_nl_search_model(&nl_schema()).await.unwrap();

    assert_eq!(model.id, "gpt-helper");
}

#[tokio::test]
async fn test_list_nl_search_models_bare_array() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("models/nl_search_model.json");

    Mock::given(method("GET"))
        .and(path("/nl_search_models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([fixture])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let models = client.list_nl_search_models().await.unwrap();

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].model_name, "openai/gpt-4.1");
}

#[tokio::test]
async fn test_create_conversation_model_conflict_falls_back_to_update() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("models/conversation_model.json");

    Mock::given(method("POST"))
        .and(path("/conversations/models"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string("{\"message\": \"Model already exists\"}"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/conversations/models/support-bot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let schema = ConversationModelSchema {
        id: Some("support-bot".to_string()),
        model_name: "openai/gpt-4.1".to_string(),
        api_key: Some("sk-provider-key".to_string()),
        history_collection: Some("conversation_store".to_string()),
        system_prompt: None,
        max_bytes: Some(16384),
        ttl: None,
    };

    let client = client_for(&mock_server);
    let model = client.create_conversation_model(&schema).await.unwrap();

    assert_eq!(model.id, "support-bot");
    assert_eq!(model.history_collection.as_deref(), Some("conversation_store"));
}

#[tokio::test]
async fn test_conflict_without_id_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/nl_search_models"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string("{\"message\": \"Model already exists\"}"),
        )
        .mount(&mock_server)
        .await;

    let mut schema = nl_schema();
    schema.id = None;

    let client = client_for(&mock_server);
    let result = client.create_nl_search_model(&schema).await;

    assert!(result.is_err());
}
