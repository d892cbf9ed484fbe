//! Provider abstractions for embeddings, generation, and document storage
//!
//! Trait-based capability interfaces so the core pipeline never depends
//! on a concrete backend; tests run against deterministic stubs.

pub mod document_store;
pub mod embedding;
pub mod llm;
pub mod local;
pub mod ollama;

#[cfg(test)]
pub(crate) mod stub;

pub use document_store::DocumentStore;
pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use local::LocalDocumentStore;
pub use ollama::{OllamaClient, OllamaEmbedder, OllamaLlm, OllamaProvider};
