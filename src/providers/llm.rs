//! LLM provider trait for answer generation

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based text generation
///
/// Implementations:
/// - `OllamaLlm`: local Ollama server (phi3, llama3.2, etc.)
/// - `EchoLlm` (tests): returns the prompt unmodified
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for a prompt, returning the response unmodified
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
