//! Filesystem-backed document store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::StoredDocument;

use super::document_store::DocumentStore;

/// Document store backed by a directory of uploaded files
pub struct LocalDocumentStore {
    /// Directory where documents are stored
    upload_dir: PathBuf,
}

impl LocalDocumentStore {
    /// Create a new local document store, creating the directory if needed
    pub fn new(upload_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&upload_dir)?;
        Ok(Self { upload_dir })
    }

    /// Resolve a filename inside the upload directory.
    ///
    /// Rejects names with path components so an upload can never escape
    /// the storage directory.
    fn doc_path(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename == "."
            || filename == ".."
        {
            return Err(Error::InvalidConfig(format!(
                "invalid document filename: '{}'",
                filename
            )));
        }
        Ok(self.upload_dir.join(filename))
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StoredDocument> {
        let path = self.doc_path(filename)?;
        tokio::fs::write(&path, data).await?;

        Ok(StoredDocument {
            filename: filename.to_string(),
            size: data.len() as u64,
            uploaded_at: Utc::now(),
        })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.doc_path(filename)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, filename: &str) -> Result<bool> {
        let path = self.doc_path(filename)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        let mut docs = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.upload_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let uploaded_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            docs.push(StoredDocument {
                filename: entry.file_name().to_string_lossy().to_string(),
                size: metadata.len(),
                uploaded_at,
            });
        }

        docs.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(docs)
    }

    fn name(&self) -> &str {
        "local-filesystem"
    }
}
