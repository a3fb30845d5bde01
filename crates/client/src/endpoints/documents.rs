//! Bulk document endpoints: streamed export and streamed import.
//!
//! Document sets can be arbitrarily large, so neither direction buffers a
//! whole payload: export copies response chunks straight to the caller's
//! writer, and import hands the caller's body (typically a file) to the
//! HTTP client untouched, scanning the JSONL response chunk by chunk.

use reqwest::{Body, Client, Method};
use secrecy::SecretString;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::endpoints::{encode_path_segment, expect_success, json_request};
use crate::error::Result;
use crate::models::{ImportAction, ImportSummary};

/// Export a collection's documents as line-delimited JSON, streaming into
/// `dest`. Returns the number of bytes written.
pub async fn export_documents<W>(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    dest: &mut W,
) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let url = format!(
        "{}/collections/{}/documents/export",
        base_url,
        encode_path_segment(collection)
    );
    let response = json_request(http, Method::GET, &url, api_key).send().await?;
    let mut response = expect_success(response).await?;

    let mut bytes_written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        dest.write_all(&chunk).await?;
        bytes_written += chunk.len() as u64;
    }
    dest.flush().await?;
    debug!(collection, bytes_written, "document export complete");
    Ok(bytes_written)
}

/// Import line-delimited JSON documents into a collection, streaming `body`
/// as the request payload.
///
/// The server answers with one JSON line per document; each line is counted
/// into the returned [`ImportSummary`] as it arrives. Per-document failures
/// do not fail the call; only transport errors and non-2xx responses do.
pub async fn import_documents(
    http: &Client,
    base_url: &str,
    api_key: &SecretString,
    collection: &str,
    action: ImportAction,
    body: Body,
) -> Result<ImportSummary> {
    let url = format!(
        "{}/collections/{}/documents/import",
        base_url,
        encode_path_segment(collection)
    );
    let response = json_request(http, Method::POST, &url, api_key)
        .query(&[("action", action.as_str())])
        .body(body)
        .send()
        .await?;
    let mut response = expect_success(response).await?;

    let mut summary = ImportSummary::default();
    // Lines can straddle chunk boundaries; carry the unfinished tail.
    let mut carry: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        carry.extend_from_slice(&chunk);
        while let Some(pos) = carry.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = carry.drain(..=pos).collect();
            summary.record_line(&String::from_utf8_lossy(&line));
        }
    }
    if !carry.is_empty() {
        summary.record_line(&String::from_utf8_lossy(&carry));
    }

    debug!(
        collection,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "document import complete"
    );
    Ok(summary)
}
