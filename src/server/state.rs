//! Application state for the RAG server

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::ingestion::TextChunker;
use crate::pipeline::RagPipeline;
use crate::providers::{LocalDocumentStore, OllamaProvider};
use crate::retrieval::IndexStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: RagConfig,
    /// The document Q&A pipeline
    pipeline: RagPipeline,
}

impl AppState {
    /// Create new application state with Ollama-backed providers
    pub fn new(config: RagConfig) -> Result<Self> {
        tracing::info!("Initializing RAG application state...");

        let chunker = TextChunker::from_config(&config.chunking)?;

        let documents = Arc::new(LocalDocumentStore::new(config.storage.upload_dir.clone())?);
        tracing::info!(
            "Document store initialized at {}",
            config.storage.upload_dir.display()
        );

        let (embedder, llm) = OllamaProvider::new(&config.llm)?.split();
        tracing::info!(
            "Ollama providers initialized (embed: {}, generate: {})",
            config.llm.embed_model,
            config.llm.generate_model
        );

        let index = Arc::new(IndexStore::open(
            config.storage.index_path.clone(),
            Arc::new(embedder),
        )?);

        let pipeline = RagPipeline::new(
            documents,
            chunker,
            index,
            Arc::new(llm),
            config.retrieval.top_k,
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        })
    }

    /// Create state around an already-built pipeline
    pub fn with_pipeline(config: RagConfig, pipeline: RagPipeline) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pipeline }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &RagConfig {
        &self.inner.config
    }

    /// Get the pipeline
    pub fn pipeline(&self) -> &RagPipeline {
        &self.inner.pipeline
    }
}
