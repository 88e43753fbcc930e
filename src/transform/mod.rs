//! Text transformation pipeline: cleaning, normalization, tokenization.
//!
//! Stages are assembled into a [`pipeline::TransformerPipeline`] in caller
//! order. Any subset of stages is legal; the pipeline falls back to plain
//! whitespace splitting when no tokenizer is configured.

use crate::error::Result;

/// Trait for text-to-text pipeline stages applied before tokenization.
pub trait TextStage: Send + Sync {
    /// Apply this stage to the input text.
    fn apply(&self, text: &str) -> Result<String>;

    /// Get the name of this stage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Trait for tokenizers that convert text into token strings.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a sequence of non-empty tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod cleaner;
pub mod normalizer;
pub mod pipeline;
pub mod tokenizer;

pub use cleaner::Cleaner;
pub use normalizer::Normalizer;
pub use pipeline::TransformerPipeline;
pub use tokenizer::WhitespaceTokenizer;
