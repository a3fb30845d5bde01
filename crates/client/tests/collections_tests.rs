//! Collection endpoint tests.
//!
//! # Invariants
//! - Listing returns the bare array the server sends, no envelope.
//! - A 404 on get yields `Ok(None)`; any other non-2xx yields an error
//!   carrying the status code and the raw body verbatim.

mod common;

use common::*;
use typesense_client::ClientError;
use typesense_client::models::{CollectionField, CollectionSchema, CollectionUpdateSchema};
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_list_collections() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("collections/list_collections.json");

    Mock::given(method("GET"))
        .and(path("/collections"))
        .and(header("X-TYPESENSE-API-KEY", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let collections =
        endpoints::list_collections(&client, &mock_server.uri(), &api_key("test-key"))
            .await
            .unwrap();

    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name, "products");
    assert_eq!(collections[0].num_documents, 1250);
    assert_eq!(collections[1].name, "My Products!");
}

#[tokio::test]
async fn test_get_collection() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("collections/get_collection.json");

    Mock::given(method("GET"))
        .and(path("/collections/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let collection =
        endpoints::get_collection(&client, &mock_server.uri(), &api_key("test-key"), "products")
            .await
            .unwrap()
            .expect("collection exists");

    assert_eq!(collection.name, "products");
    assert_eq!(collection.enable_nested_fields, Some(true));
    let embedding = &collection.fields[2];
    assert_eq!(embedding.num_dim, Some(384));
    assert_eq!(embedding.hnsw_params.as_ref().unwrap().m, Some(16));
}

#[tokio::test]
async fn test_get_collection_404_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/collections/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result =
        endpoints::get_collection(&client, &mock_server.uri(), &api_key("test-key"), "ghost")
            .await
            .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_collection() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("collections/create_collection.json");

    Mock::given(method("POST"))
        .and(path("/collections"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let schema = CollectionSchema {
        name: "books".to_string(),
        fields: vec![
            CollectionField::new("title", "string"),
            CollectionField::new("pages", "int32"),
        ],
        default_sorting_field: None,
        token_separators: None,
        symbols_to_index: None,
        enable_nested_fields: None,
    };

    let client = Client::new();
    let collection =
        endpoints::create_collection(&client, &mock_server.uri(), &api_key("test-key"), &schema)
            .await
            .unwrap();

    assert_eq!(collection.name, "books");
    assert_eq!(collection.num_documents, 0);
}

#[tokio::test]
async fn test_create_collection_error_preserves_status_and_body() {
    let mock_server = MockServer::start().await;
    let body = "{\"message\": \"Field `title` has been declared twice\"}";

    Mock::given(method("POST"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(409).set_body_string(body))
        .mount(&mock_server)
        .await;

    let schema = CollectionSchema {
        name: "books".to_string(),
        fields: vec![CollectionField::new("title", "string")],
        default_sorting_field: None,
        token_separators: None,
        symbols_to_index: None,
        enable_nested_fields: None,
    };

    let client = Client::new();
    let err =
        endpoints::create_collection(&client, &mock_server.uri(), &api_key("test-key"), &schema)
            .await
            .unwrap_err();

    match err {
        ClientError::ApiError {
            status,
            body: error_body,
            ..
        } => {
            assert_eq!(status, 409);
            assert_eq!(error_body, body);
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_collection_drops_field() {
    let mock_server = MockServer::start().await;
    let response = serde_json::json!({
        "fields": [
            {"name": "pages", "drop": true},
            {"name": "page_count", "type": "int32"}
        ]
    });

    Mock::given(method("PATCH"))
        .and(path("/collections/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&mock_server)
        .await;

    let mut dropped = CollectionField::new("pages", "int32");
    dropped.field_type = None;
    dropped.drop = Some(true);
    let update = CollectionUpdateSchema {
        fields: vec![dropped, CollectionField::new("page_count", "int32")],
    };

    let client = Client::new();
    let applied =
        endpoints::update_collection(&client, &mock_server.uri(), &api_key("test-key"), "books", &update)
            .await
            .unwrap();

    assert_eq!(applied.fields.len(), 2);
    assert_eq!(applied.fields[0].drop, Some(true));
}

#[tokio::test]
async fn test_delete_collection() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("collections/create_collection.json");

    Mock::given(method("DELETE"))
        .and(path("/collections/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let deleted =
        endpoints::delete_collection(&client, &mock_server.uri(), &api_key("test-key"), "books")
            .await
            .unwrap();

    assert_eq!(deleted.name, "books");
}

#[tokio::test]
async fn test_collection_name_is_path_encoded() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("collections/get_collection.json");

    Mock::given(method("GET"))
        .and(path("/collections/My%20Products!"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::get_collection(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "My Products!",
    )
    .await
    .unwrap();

    assert!(result.is_some());
}
