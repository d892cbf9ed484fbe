//! Chunk types with source tracking

use serde::{Deserialize, Serialize};

use super::document::FileType;

/// Where a chunk came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkSource {
    /// Filename of the document the chunk was cut from
    pub filename: String,
    /// File type of that document
    pub file_type: FileType,
}

/// A contiguous piece of a document's extracted text.
///
/// The unit of embedding and retrieval. Immutable once created; every
/// chunk is at most `chunk_size` characters long except possibly the
/// final chunk of a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk text content
    pub content: String,
    /// Source document information
    pub source: ChunkSource,
    /// Position of the chunk within its document (0-based)
    pub seq: u32,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(content: String, source: ChunkSource, seq: u32) -> Self {
        Self {
            content,
            source,
            seq,
        }
    }
}

/// A chunk together with its embedding, owned by the index store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedChunk {
    /// Chunk text content
    pub content: String,
    /// Source document information
    pub source: ChunkSource,
    /// Position of the chunk within its document
    pub seq: u32,
    /// Embedding vector for the chunk text
    pub embedding: Vec<f32>,
}

impl IndexedChunk {
    /// Rebuild the plain chunk, without the embedding
    pub fn to_chunk(&self) -> Chunk {
        Chunk {
            content: self.content.clone(),
            source: self.source.clone(),
            seq: self.seq,
        }
    }
}

/// A retrieved chunk with its similarity to the query
#[derive(Debug, Clone, Serialize)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query embedding (higher is more similar)
    pub similarity: f32,
}
