//! Retrieval-then-generation answering

use std::sync::Arc;

use crate::error::Result;
use crate::providers::LlmProvider;
use crate::retrieval::IndexStore;

use super::prompt::PromptBuilder;

/// Fixed answer returned when retrieval finds nothing; the generation
/// provider is not consulted in that case
pub const NO_RELEVANT_INFORMATION: &str = "No relevant information found in documents.";

/// Answers questions by retrieving the most similar chunks and
/// prompting the LLM with them as context
pub struct Answerer {
    index: Arc<IndexStore>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl Answerer {
    /// Create a new answerer retrieving `top_k` chunks per question
    pub fn new(index: Arc<IndexStore>, llm: Arc<dyn LlmProvider>, top_k: usize) -> Self {
        Self { index, llm, top_k }
    }

    /// Answer a question from indexed content.
    ///
    /// Returns the LLM response unmodified; the retrieval-count policy
    /// and prompt construction are the only guarantees here, the answer
    /// text itself is provider-dependent.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let results = self.index.retrieve(question, self.top_k).await?;

        if results.is_empty() {
            tracing::info!("No chunks retrieved, returning sentinel answer");
            return Ok(NO_RELEVANT_INFORMATION.to_string());
        }

        tracing::info!("Retrieved {} chunks for question", results.len());

        let context = PromptBuilder::build_context(&results);
        let prompt = PromptBuilder::build_qa_prompt(question, &context);

        self.llm.generate(&prompt).await
    }
}
