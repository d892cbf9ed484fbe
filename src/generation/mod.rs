//! Context assembly and LLM-backed answer generation

pub mod answerer;
pub mod prompt;

pub use answerer::{Answerer, NO_RELEVANT_INFORMATION};
pub use prompt::PromptBuilder;
