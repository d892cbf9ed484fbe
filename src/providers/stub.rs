//! Deterministic provider stubs backing the test suite, no network calls

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{Error, Result};
use crate::types::StoredDocument;

use super::document_store::DocumentStore;
use super::embedding::EmbeddingProvider;
use super::llm::LlmProvider;

const STUB_DIMENSIONS: usize = 64;

/// Deterministic bag-of-words embedder.
///
/// Each distinct token gets its own vector slot, assigned on first
/// sight, and the vector is L2-normalized. Identical texts always get
/// identical vectors, so self-similarity is maximal, and cosine
/// similarity between texts tracks token overlap.
pub struct StubEmbedder {
    vocab: Mutex<HashMap<String, usize>>,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self {
            vocab: Mutex::new(HashMap::new()),
        }
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; STUB_DIMENSIONS];
        let mut vocab = self.vocab.lock();

        for token in text
            .split_whitespace()
            .map(|t| {
                t.chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|t| !t.is_empty())
        {
            let next = vocab.len();
            let slot = *vocab.entry(token).or_insert(next) % STUB_DIMENSIONS;
            vector[slot] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        STUB_DIMENSIONS
    }

    fn name(&self) -> &str {
        "stub-embedder"
    }
}

/// Embedder that always fails, for provider-error propagation tests
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::provider("embedding backend unavailable"))
    }

    fn dimensions(&self) -> usize {
        STUB_DIMENSIONS
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }
}

/// LLM stub that echoes the prompt back and counts invocations
pub struct EchoLlm {
    calls: AtomicUsize,
}

impl EchoLlm {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for EchoLlm {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(prompt.to_string())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "echo-llm"
    }

    fn model(&self) -> &str {
        "echo"
    }
}

/// In-memory document store for pipeline tests
pub struct MemoryDocumentStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StoredDocument> {
        self.files
            .lock()
            .insert(filename.to_string(), data.to_vec());
        Ok(StoredDocument {
            filename: filename.to_string(),
            size: data.len() as u64,
            uploaded_at: chrono::Utc::now(),
        })
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>> {
        self.files
            .lock()
            .get(filename)
            .cloned()
            .ok_or_else(|| Error::NotFound(filename.to_string()))
    }

    async fn exists(&self, filename: &str) -> Result<bool> {
        Ok(self.files.lock().contains_key(filename))
    }

    async fn list(&self) -> Result<Vec<StoredDocument>> {
        Ok(self
            .files
            .lock()
            .iter()
            .map(|(filename, data)| StoredDocument {
                filename: filename.clone(),
                size: data.len() as u64,
                uploaded_at: chrono::Utc::now(),
            })
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
