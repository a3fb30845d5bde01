//! Bulk document API methods for [`TypesenseClient`].
//!
//! Export and import are both streamed end to end so memory use stays
//! bounded regardless of collection size.

use std::path::Path;

use crate::client::TypesenseClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ImportAction, ImportSummary};

impl TypesenseClient {
    /// Export a collection's documents as JSONL into the given writer.
    /// Returns the number of bytes written.
    pub async fn export_documents<W>(&self, collection: &str, dest: &mut W) -> Result<u64>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        endpoints::export_documents(&self.http, &self.base_url, &self.api_key, collection, dest)
            .await
    }

    /// Export a collection's documents as JSONL into a file, creating or
    /// truncating it.
    pub async fn export_documents_to_file(
        &self,
        collection: &str,
        path: &Path,
    ) -> Result<u64> {
        let mut file = tokio::fs::File::create(path).await?;
        self.export_documents(collection, &mut file).await
    }

    /// Import documents from an arbitrary streaming body.
    pub async fn import_documents(
        &self,
        collection: &str,
        action: ImportAction,
        body: reqwest::Body,
    ) -> Result<ImportSummary> {
        endpoints::import_documents(
            &self.http,
            &self.base_url,
            &self.api_key,
            collection,
            action,
            body,
        )
        .await
    }

    /// Import documents from a JSONL file, streaming it as the request body
    /// with no read-ahead buffering of the whole file.
    pub async fn import_documents_from_file(
        &self,
        collection: &str,
        action: ImportAction,
        path: &Path,
    ) -> Result<ImportSummary> {
        let file = tokio::fs::File::open(path).await?;
        self.import_documents(collection, action, reqwest::Body::from(file))
            .await
    }
}
