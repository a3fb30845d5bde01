//! Typed client library for the Typesense Server API and the Typesense
//! Cloud Management API.
//!
//! Two clients live here:
//! - [`TypesenseClient`]: collections, documents, synonyms/synonym sets,
//!   overrides/curation sets, stopwords, API keys, aliases, presets,
//!   analytics rules, NL search models, conversation models.
//! - [`CloudClient`]: managed cluster lifecycle, API key generation,
//!   scheduled configuration changes, readiness polling.
//!
//! Both follow the same response contract: 2xx decodes into typed results,
//! 404 on gets (and on version-retired list endpoints) is a typed miss, and
//! every other non-2xx preserves the numeric status and raw body verbatim in
//! [`ClientError::ApiError`].

pub mod client;
pub mod cloud;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::TypesenseClient;
pub use client::builder::TypesenseClientBuilder;
pub use cloud::{CloudClient, CloudClientBuilder};
pub use error::{ClientError, Result};
pub use version::{ApiGeneration, LATEST_KNOWN_MAJOR_VERSION, SET_API_MAJOR_VERSION};
