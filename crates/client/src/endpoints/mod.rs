//! REST API endpoint implementations for the Typesense Server API.
//!
//! Responsibilities:
//! - One free function per API operation, taking the HTTP client, base URL,
//!   and API key explicitly (no hidden state).
//! - Uniform header injection (`Content-Type` + `X-TYPESENSE-API-KEY`).
//! - Uniform response mapping: 2xx decodes, 404 is a typed soft miss where
//!   the operation contract says so, everything else becomes
//!   [`ClientError::ApiError`] with the body preserved verbatim.
//!
//! Does NOT handle:
//! - Server-version detection or memoization (see `client::version`).
//! - Idempotent-upsert conflict fallbacks (client-level concern).

mod aliases;
mod analytics;
mod collections;
mod conversation_models;
mod debug;
mod documents;
mod keys;
mod nl_search_models;
mod overrides;
mod presets;
mod stopwords;
mod synonyms;
pub mod url_encoding;

pub use aliases::{delete_alias, get_alias, list_aliases, upsert_alias};
pub use analytics::{
    delete_analytics_rule, get_analytics_rule, list_analytics_rules, upsert_analytics_rule,
};
pub use collections::{
    create_collection, delete_collection, get_collection, list_collections, update_collection,
};
pub use conversation_models::{
    create_conversation_model, delete_conversation_model, get_conversation_model,
    list_conversation_models, update_conversation_model,
};
pub use debug::{get_debug_info, get_health};
pub use documents::{export_documents, import_documents};
pub use keys::{create_key, delete_key, get_key, list_keys};
pub use nl_search_models::{
    create_nl_search_model, delete_nl_search_model, get_nl_search_model, list_nl_search_models,
    update_nl_search_model,
};
pub use overrides::{
    delete_curation_set, delete_override, get_curation_set, get_override, list_curation_sets,
    list_overrides, upsert_curation_set, upsert_override,
};
pub use presets::{delete_preset, get_preset, list_presets, upsert_preset};
pub use stopwords::{
    delete_stopwords_set, get_stopwords_set, list_stopwords_sets, upsert_stopwords_set,
};
pub use synonyms::{
    delete_synonym, delete_synonym_set, get_synonym, get_synonym_set, list_synonym_sets,
    list_synonyms, upsert_synonym, upsert_synonym_set,
};
pub use url_encoding::encode_path_segment;

use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Auth header for the Server API.
pub(crate) const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

/// Start a JSON request with the fixed Typesense header pair.
pub(crate) fn json_request(
    http: &Client,
    method: Method,
    url: &str,
    api_key: &SecretString,
) -> RequestBuilder {
    http.request(method, url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .header(API_KEY_HEADER, api_key.expose_secret())
}

/// Convert a non-2xx response into [`ClientError::ApiError`], preserving the
/// status code and raw body verbatim.
pub(crate) async fn api_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable response body>".to_string());
    ClientError::ApiError { status, url, body }
}

/// Pass 2xx responses through, map everything else to an API error.
pub(crate) async fn expect_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

/// Decode the typed result of a "get" operation, treating 404 as a typed
/// miss rather than an error.
pub(crate) async fn decode_optional<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<Option<T>> {
    if response.status().as_u16() == 404 {
        return Ok(None);
    }
    let response = expect_success(response).await?;
    Ok(Some(response.json().await?))
}
