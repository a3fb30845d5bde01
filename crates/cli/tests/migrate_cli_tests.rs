//! End-to-end tests for the `migrate` subcommand.
//!
//! # Invariants
//! - A missing source directory fails fast with the configuration error
//!   code (2), before any network call.
//! - An empty documents file performs zero import HTTP calls and reports
//!   "no documents to import".
//! - Replay order per collection is create -> documents -> synonyms ->
//!   overrides; a collection-creation failure aborts the run.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("typesense-cli").expect("binary builds");
    cmd.env("DOTENV_DISABLED", "1")
        .env_remove("TYPESENSE_HOST")
        .env_remove("TYPESENSE_API_KEY");
    cmd
}

fn write_products_export(dir: &Path, documents: &str) {
    let data = dir.join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(
        data.join("products.schema.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "name": "products",
            "fields": [
                {"name": "title", "type": "string"},
                {"name": "price", "type": "float"}
            ]
        }))
        .unwrap(),
    )
    .unwrap();
    std::fs::write(data.join("products.jsonl"), documents).unwrap();
}

async fn run_migrate(source: &Path, mock_server: &MockServer, extra: &[&str]) -> assert_cmd::assert::Assert {
    let address = *mock_server.address();
    let source = source.to_path_buf();
    let extra: Vec<String> = extra.iter().map(|s| s.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        let mut cmd = cli();
        cmd.args(["migrate", "--source-dir"])
            .arg(&source)
            .args([
                "--target-host",
                &address.ip().to_string(),
                "--target-port",
                &address.port().to_string(),
                "--target-api-key",
                "target-key",
            ]);
        for arg in &extra {
            cmd.arg(arg);
        }
        cmd.assert()
    })
    .await
    .unwrap()
}

#[test]
fn migrate_missing_source_dir_fails_fast() {
    cli()
        .args([
            "migrate",
            "--source-dir",
            "/nonexistent/export",
            "--target-host",
            "localhost",
            "--target-api-key",
            "xyz",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Source directory does not exist"));
}

#[test]
fn migrate_requires_target_flags() {
    cli()
        .args(["migrate", "--source-dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--target-host"));
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_empty_documents_file_skips_import_entirely() {
    let mock_server = MockServer::start().await;
    let export_dir = tempfile::tempdir().unwrap();
    write_products_export(export_dir.path(), "");

    Mock::given(method("GET"))
        .and(path("/collections/products"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "name": "products",
            "num_documents": 0,
            "created_at": 1722000000,
            "fields": [
                {"name": "title", "type": "string"},
                {"name": "price", "type": "float"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    // The empty file must not produce a single import call.
    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let assert = run_migrate(export_dir.path(), &mock_server, &["--include-documents"]).await;

    assert
        .success()
        .stdout(predicate::str::contains("no documents to import"))
        .stderr(predicate::str::contains("WARNING"));
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_reports_document_and_synonym_counts() {
    let mock_server = MockServer::start().await;
    let export_dir = tempfile::tempdir().unwrap();
    write_products_export(
        export_dir.path(),
        "{\"title\":\"a\",\"price\":1.0}\n{\"title\":\"b\",\"price\":2.0}\n{\"title\":\"c\",\"price\":3.0}\n{\"title\":\"broken\"\n",
    );
    std::fs::write(
        export_dir.path().join("data/products.synonyms.json"),
        serde_json::to_string_pretty(&serde_json::json!([
            {"id": "colors", "synonyms": ["red", "crimson"]}
        ]))
        .unwrap(),
    )
    .unwrap();

    // Collection already exists on the target: create is skipped.
    Mock::given(method("GET"))
        .and(path("/collections/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "products",
            "num_documents": 10,
            "created_at": 1700000000,
            "fields": [{"name": "title", "type": "string"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collections"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "{\"success\":true}\n{\"success\":true}\n{\"success\":true}\n{\"success\":false,\"error\":\"Bad JSON\"}\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/collections/products/synonyms/colors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "colors", "synonyms": ["red", "crimson"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let assert = run_migrate(export_dir.path(), &mock_server, &["--include-documents"]).await;

    assert
        .success()
        .stdout(predicate::str::contains("already existed"))
        .stdout(predicate::str::contains("3 document(s) imported, 1 failed"))
        .stdout(predicate::str::contains("1 synonym(s)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_aborts_when_collection_creation_fails() {
    let mock_server = MockServer::start().await;
    let export_dir = tempfile::tempdir().unwrap();
    write_products_export(export_dir.path(), "{\"title\":\"a\",\"price\":1.0}\n");

    Mock::given(method("GET"))
        .and(path("/collections/products"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"message\": \"Not Found\"}"))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collections"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("{\"message\": \"Not Ready or Lagging\"}"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/collections/products/documents/import"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(0)
        .mount(&mock_server)
        .await;

    let assert = run_migrate(export_dir.path(), &mock_server, &["--include-documents"]).await;

    assert
        .failure()
        .stderr(predicate::str::contains("creating collection 'products'"))
        .stderr(predicate::str::contains("503"));
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_imports_global_stopwords_after_collections() {
    let mock_server = MockServer::start().await;
    let export_dir = tempfile::tempdir().unwrap();
    write_products_export(export_dir.path(), "");
    std::fs::write(
        export_dir.path().join("data/_stopwords.json"),
        serde_json::to_string_pretty(&serde_json::json!([
            {"id": "common_en", "stopwords": ["a", "the"], "locale": "en"}
        ]))
        .unwrap(),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/collections/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "products",
            "num_documents": 0,
            "created_at": 1700000000,
            "fields": [{"name": "title", "type": "string"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/stopwords/common_en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "common_en", "stopwords": ["a", "the"], "locale": "en"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let assert = run_migrate(export_dir.path(), &mock_server, &[]).await;

    assert
        .success()
        .stdout(predicate::str::contains("1 stopwords set(s)"));
}
