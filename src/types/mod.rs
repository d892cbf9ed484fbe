//! Shared types: chunks, documents, and API payloads

pub mod chunk;
pub mod document;
pub mod response;

pub use chunk::{Chunk, ChunkSource, IndexedChunk, ScoredChunk};
pub use document::{FileType, StoredDocument};
