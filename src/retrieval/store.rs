//! Persistent chunk index with cosine-similarity retrieval
//!
//! The store owns the full collection of indexed chunks for the life of
//! the process. `add` commits each batch atomically: the new snapshot is
//! written to a temp file in the same directory and renamed over the old
//! one, and in-memory state is swapped only after the rename succeeds.
//! A crash mid-write never exposes a partially indexed batch.

use parking_lot::RwLock;
use std::cmp::Ordering;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::{Chunk, IndexedChunk, ScoredChunk};

/// Append-only store of chunk texts, metadata, and embeddings
pub struct IndexStore {
    /// Snapshot file path
    path: PathBuf,
    /// Embedding capability
    embedder: Arc<dyn EmbeddingProvider>,
    /// Indexed chunks; writers swap the whole vector after commit
    entries: RwLock<Vec<IndexedChunk>>,
}

impl IndexStore {
    /// Open an index store, loading the persisted snapshot if present
    pub fn open(path: PathBuf, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let entries = Self::load_snapshot(&path);
        tracing::info!("Index store opened with {} chunks", entries.len());

        Ok(Self {
            path,
            embedder,
            entries: RwLock::new(entries),
        })
    }

    /// Load persisted entries; an unreadable snapshot starts empty
    fn load_snapshot(path: &Path) -> Vec<IndexedChunk> {
        if !path.exists() {
            return Vec::new();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Failed to parse index snapshot {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read index snapshot {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Embed and append a batch of chunks, committed as a unit.
    ///
    /// The whole batch is embedded in one provider call before anything
    /// is stored, so a provider failure leaves the index untouched.
    /// Returns the number of chunks stored.
    pub async fn add(&self, chunks: Vec<Chunk>) -> Result<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(Error::provider(format!(
                "embedding provider returned {} vectors for {} chunks",
                embeddings.len(),
                chunks.len()
            )));
        }

        let count = chunks.len();
        let mut entries = self.entries.write();

        let mut next = entries.clone();
        next.extend(
            chunks
                .into_iter()
                .zip(embeddings)
                .map(|(chunk, embedding)| IndexedChunk {
                    content: chunk.content,
                    source: chunk.source,
                    seq: chunk.seq,
                    embedding,
                }),
        );

        self.persist(&next)?;
        *entries = next;

        tracing::info!("Indexed {} chunks ({} total)", count, entries.len());
        Ok(count)
    }

    /// Write a snapshot atomically: temp file in the same directory,
    /// then rename over the previous snapshot
    fn persist(&self, entries: &[IndexedChunk]) -> Result<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;

        serde_json::to_writer(&mut tmp, entries)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        Ok(())
    }

    /// Retrieve the `k` chunks most similar to the query, most similar
    /// first. An empty store yields an empty result without consulting
    /// the embedding provider.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>> {
        if k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed(query).await?;

        let entries = self.entries.read();
        let mut scored: Vec<ScoredChunk> = entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.to_chunk(),
                similarity: cosine_similarity(&query_embedding, &entry.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(k);

        Ok(scored)
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store holds no chunks
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Cosine similarity between two vectors; 0.0 for zero-norm inputs
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
