//! Document store trait for raw uploaded bytes

use async_trait::async_trait;

use crate::error::Result;
use crate::types::StoredDocument;

/// Trait for storing and reading raw document bytes
///
/// Documents are keyed by filename; an upload with an existing filename
/// replaces the stored bytes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a document's raw bytes
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StoredDocument>;

    /// Read a document's raw bytes; fails with `NotFound` if absent
    async fn read(&self, filename: &str) -> Result<Vec<u8>>;

    /// Check whether a document exists
    async fn exists(&self, filename: &str) -> Result<bool>;

    /// List stored documents
    async fn list(&self) -> Result<Vec<StoredDocument>>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
