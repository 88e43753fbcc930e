//! Transformer pipeline that combines text stages with a tokenizer.
//!
//! The pipeline applies processing in this order:
//! 1. Text stages (cleaner, normalizer, ...) in the order they were added
//! 2. Tokenizer, if one is configured
//!
//! Any subset of stages is legal. Without a tokenizer the final text is
//! split on whitespace as a fallback, so `transform` always yields tokens.
//!
//! # Examples
//!
//! ```
//! use shrike::transform::{Cleaner, Normalizer, TransformerPipeline, WhitespaceTokenizer};
//! use std::sync::Arc;
//!
//! let pipeline = TransformerPipeline::new()
//!     .add_stage(Arc::new(Cleaner::new().unwrap()))
//!     .add_stage(Arc::new(Normalizer::new()))
//!     .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
//!
//! let tokens = pipeline.transform("Hello, World!").unwrap();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use std::sync::Arc;

use tracing::debug;

use super::{TextStage, Tokenizer};
use crate::error::Result;

/// An ordered, composable transformation pipeline.
///
/// Deterministic for a fixed configuration: running the same text twice
/// always yields the same output.
#[derive(Clone, Default)]
pub struct TransformerPipeline {
    stages: Vec<Arc<dyn TextStage>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl TransformerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        TransformerPipeline::default()
    }

    /// Append a text stage to the pipeline.
    pub fn add_stage(mut self, stage: Arc<dyn TextStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Set the tokenizer producing the final token sequence.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// The configured text stages, in application order.
    pub fn stages(&self) -> &[Arc<dyn TextStage>] {
        &self.stages
    }

    /// Whether a tokenizer is configured.
    pub fn has_tokenizer(&self) -> bool {
        self.tokenizer.is_some()
    }

    /// Run `text` through every configured stage and tokenize the result.
    pub fn transform(&self, text: &str) -> Result<Vec<String>> {
        let mut processed = text.to_string();
        for stage in &self.stages {
            processed = stage.apply(&processed)?;
            debug!(stage = stage.name(), len = processed.len(), "applied stage");
        }

        match &self.tokenizer {
            Some(tokenizer) => tokenizer.tokenize(&processed),
            // Fallback keeps the contract "transform yields tokens" even
            // for stage-only pipelines.
            None => Ok(processed.split_whitespace().map(|s| s.to_string()).collect()),
        }
    }
}

impl std::fmt::Debug for TransformerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerPipeline")
            .field(
                "stages",
                &self.stages.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .field("tokenizer", &self.tokenizer.as_ref().map(|t| t.name()))
            .finish()
    }
}
