//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Typesense clients. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the
//!   crate root.
//! - All fixture files must be valid JSON.

// Re-export test utilities from typesense-client
#[allow(unused_imports)]
pub use typesense_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use typesense_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrap a plain string as the SecretString the endpoint functions expect.
#[allow(dead_code)]
pub fn api_key(value: &str) -> secrecy::SecretString {
    secrecy::SecretString::new(value.to_string().into())
}

/// Build a [`typesense_client::TypesenseClient`] pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(mock_server: &MockServer) -> typesense_client::TypesenseClient {
    typesense_client::TypesenseClient::builder()
        .base_url(mock_server.uri())
        .api_key("test-key".to_string())
        .build()
        .expect("mock client builds")
}
