//! Bulk document endpoint tests: streamed export and import counting.
//!
//! # Invariants
//! - Export bytes reach the writer unmodified.
//! - Import counts one success/failure per response line via the
//!   `"success":true|false` marker, including lines split across chunks.

mod common;

use common::*;
use typesense_client::models::ImportAction;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_export_streams_to_writer() {
    let mock_server = MockServer::start().await;
    let body = "{\"id\":\"1\",\"title\":\"a\"}\n{\"id\":\"2\",\"title\":\"b\"}\n";

    Mock::given(method("GET"))
        .and(path("/collections/products/documents/export"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let mut dest = Vec::new();
    let bytes = endpoints::export_documents(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        &mut dest,
    )
    .await
    .unwrap();

    assert_eq!(bytes, body.len() as u64);
    assert_eq!(String::from_utf8(dest).unwrap(), body);
}

#[tokio::test]
async fn test_import_counts_successes_and_failures() {
    let mock_server = MockServer::start().await;
    // Three successes, one failure: reported as 3/1, not an error.
    let response_body = concat!(
        "{\"success\":true}\n",
        "{\"success\":true}\n",
        "{\"success\":false,\"error\":\"Bad JSON\",\"document\":\"{\"}\n",
        "{\"success\":true}\n",
    );

    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .and(query_param("action", "upsert"))
        .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let summary = endpoints::import_documents(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        ImportAction::Upsert,
        reqwest::Body::from("{\"id\":\"1\"}\n{\"id\":\"2\"}\n{\"id\":\"3\"}\n{\"id\":\"4\"}\n"),
    )
    .await
    .unwrap();

    assert_eq!(summary.succeeded, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.total(), 4);
}

#[tokio::test]
async fn test_import_counts_final_unterminated_line() {
    let mock_server = MockServer::start().await;
    // No trailing newline on the last response line.
    let response_body = "{\"success\":true}\n{\"success\":false}";

    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .respond_with(ResponseTemplate::new(200).set_body_string(response_body))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let summary = endpoints::import_documents(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        ImportAction::Create,
        reqwest::Body::from("{\"id\":\"1\"}\n{\"id\":\"2\"}"),
    )
    .await
    .unwrap();

    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failed, 1);
}

#[tokio::test]
async fn test_import_from_file_streams_body() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let path_buf = dir.path().join("products.jsonl");
    std::fs::write(&path_buf, "{\"id\":\"1\"}\n{\"id\":\"2\"}\n").unwrap();

    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .and(query_param("action", "upsert"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("{\"success\":true}\n{\"success\":true}\n"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let summary = client
        .import_documents_from_file("products", ImportAction::Upsert, &path_buf)
        .await
        .unwrap();

    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_import_transport_failure_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .respond_with(ResponseTemplate::new(503).set_body_string("{\"message\": \"Not Ready\"}"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let result = endpoints::import_documents(
        &client,
        &mock_server.uri(),
        &api_key("test-key"),
        "products",
        ImportAction::Create,
        reqwest::Body::from("{\"id\":\"1\"}\n"),
    )
    .await;

    assert!(result.is_err());
}
