//! The RAG pipeline: the operations exposed to the transport layer
//!
//! Constructed with explicit provider objects rather than globals so the
//! whole flow can run against stub providers in tests.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::generation::Answerer;
use crate::ingestion::{TextChunker, TextExtractor};
use crate::providers::{DocumentStore, LlmProvider};
use crate::retrieval::IndexStore;
use crate::types::{
    response::{AskResponse, ChunkPreviewResponse, IndexResponse},
    FileType,
};

/// Number of sample chunks returned by the chunk preview
const PREVIEW_SAMPLE_CHUNKS: usize = 3;

/// Document Q&A pipeline: extraction, chunking, indexing, and answering
pub struct RagPipeline {
    documents: Arc<dyn DocumentStore>,
    chunker: TextChunker,
    index: Arc<IndexStore>,
    answerer: Answerer,
}

impl RagPipeline {
    /// Create a new pipeline from its collaborators
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        chunker: TextChunker,
        index: Arc<IndexStore>,
        llm: Arc<dyn LlmProvider>,
        top_k: usize,
    ) -> Self {
        let answerer = Answerer::new(Arc::clone(&index), llm, top_k);
        Self {
            documents,
            chunker,
            index,
            answerer,
        }
    }

    /// Extract the full text of a stored document.
    ///
    /// Fails with `NotFound` if the document is missing; an unsupported
    /// type yields an empty string.
    pub async fn extract_text(&self, filename: &str) -> Result<String> {
        let data = self.documents.read(filename).await?;
        TextExtractor::extract(filename, &data)
    }

    /// Extract and chunk a document without touching the index
    pub async fn preview_chunks(&self, filename: &str) -> Result<ChunkPreviewResponse> {
        let text = self.extract_text(filename).await?;
        if text.trim().is_empty() {
            return Err(Error::EmptyContent(filename.to_string()));
        }

        let chunks = self.chunker.chunk(&text);
        let total_chunks = chunks.len();

        Ok(ChunkPreviewResponse {
            filename: filename.to_string(),
            total_chunks,
            sample_chunks: chunks.into_iter().take(PREVIEW_SAMPLE_CHUNKS).collect(),
        })
    }

    /// Extract, chunk, embed, and store a document's chunks
    pub async fn index_document(&self, filename: &str) -> Result<IndexResponse> {
        let text = self.extract_text(filename).await?;
        if text.trim().is_empty() {
            return Err(Error::EmptyContent(filename.to_string()));
        }

        let chunks = self
            .chunker
            .chunk_document(&text, filename, FileType::from_path(filename));
        let chunks_indexed = self.index.add(chunks).await?;

        tracing::info!("Indexed '{}' into {} chunks", filename, chunks_indexed);

        Ok(IndexResponse {
            filename: filename.to_string(),
            chunks_indexed,
            status: "Embeddings stored successfully".to_string(),
        })
    }

    /// Answer a question from indexed content
    pub async fn ask(&self, question: &str) -> Result<AskResponse> {
        let answer = self.answerer.answer(question).await?;
        Ok(AskResponse {
            question: question.to_string(),
            answer,
        })
    }

    /// The document store this pipeline reads from
    pub fn documents(&self) -> &Arc<dyn DocumentStore> {
        &self.documents
    }

    /// The chunk index this pipeline writes to
    pub fn index(&self) -> &Arc<IndexStore> {
        &self.index
    }
}
