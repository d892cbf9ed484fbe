//! minirag: a minimal retrieval-augmented document Q&A service
//!
//! Documents are uploaded, their text extracted and split into overlapping
//! chunks, the chunks embedded and stored in a persistent index, and
//! questions answered by retrieving the most similar chunks and prompting
//! an LLM with them as context.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use generation::Answerer;
pub use ingestion::{TextChunker, TextExtractor};
pub use pipeline::RagPipeline;
pub use retrieval::IndexStore;
pub use types::{Chunk, ChunkSource, FileType, ScoredChunk};
