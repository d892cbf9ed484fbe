//! Prompt templates for grounded question answering

use crate::types::ScoredChunk;

/// Prompt builder for RAG queries
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved chunk texts into a single context string with a
    /// blank-line separator, preserving retrieval order
    pub fn build_context(results: &[ScoredChunk]) -> String {
        results
            .iter()
            .map(|r| r.chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the grounded Q&A prompt: answer strictly from the supplied
    /// context, with a fixed fallback phrase when the answer is absent
    pub fn build_qa_prompt(question: &str, context: &str) -> String {
        format!(
            r#"Answer the question using ONLY the context below.
If the answer is not present in the context, say "I don't know".

Context:
{context}

Question:
{question}"#
        )
    }
}
