//! Document model holding raw content and lazily-derived tokens.
//!
//! A [`TextDocument`] owns no processing logic: token production is
//! delegated to an optionally bound [`TransformerPipeline`], and the result
//! is cached so repeated access never re-runs the pipeline.
//!
//! # Examples
//!
//! ```
//! use shrike::document::TextDocument;
//!
//! let doc = TextDocument::new("hello brave world");
//! assert_eq!(doc.tokens().unwrap(), &["hello", "brave", "world"]);
//! // Second access returns the cached sequence.
//! assert_eq!(doc.tokens().unwrap(), &["hello", "brave", "world"]);
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::transform::TransformerPipeline;

/// A document with immutable raw content and a lazy token cache.
///
/// Tokens are computed at most once per instance. Under concurrent first
/// access the pipeline may run redundantly and one result is discarded;
/// every caller still observes the identical sequence because the pipeline
/// is deterministic.
#[derive(Debug)]
pub struct TextDocument {
    content: String,
    pipeline: Option<Arc<TransformerPipeline>>,
    source_path: Option<PathBuf>,
    metadata: HashMap<String, String>,
    tokens: OnceLock<Vec<String>>,
}

impl TextDocument {
    /// Create a document from raw content, with no pipeline bound.
    ///
    /// Tokens then derive from plain whitespace splitting.
    pub fn new<S: Into<String>>(content: S) -> Self {
        TextDocument {
            content: content.into(),
            pipeline: None,
            source_path: None,
            metadata: HashMap::new(),
            tokens: OnceLock::new(),
        }
    }

    /// Bind a transformer pipeline used to derive tokens.
    pub fn with_pipeline(mut self, pipeline: Arc<TransformerPipeline>) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Record the path the content was read from.
    pub fn with_source_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Attach a metadata entry (reader collaborators use this for format
    /// details like titles or front matter).
    pub fn with_metadata<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The raw text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The path the content came from, if any.
    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    /// Reader-supplied metadata.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The token sequence, computed on first access and cached.
    pub fn tokens(&self) -> Result<&[String]> {
        if let Some(tokens) = self.tokens.get() {
            return Ok(tokens);
        }

        let computed = match &self.pipeline {
            Some(pipeline) => pipeline.transform(&self.content)?,
            None => self
                .content
                .split_whitespace()
                .map(|s| s.to_string())
                .collect(),
        };

        // A concurrent caller may have won the race; its value is
        // identical, so losing the set is harmless.
        Ok(self.tokens.get_or_init(|| computed))
    }

    /// Whether the token cache has been populated yet.
    pub fn tokens_cached(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Whether the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Normalizer, WhitespaceTokenizer};

    #[test]
    fn test_tokens_without_pipeline() {
        let doc = TextDocument::new("one two three");
        assert_eq!(doc.tokens().unwrap(), &["one", "two", "three"]);
    }

    #[test]
    fn test_tokens_with_pipeline() {
        let pipeline = TransformerPipeline::new()
            .add_stage(Arc::new(Normalizer::new()))
            .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
        let doc = TextDocument::new("One TWO").with_pipeline(Arc::new(pipeline));
        assert_eq!(doc.tokens().unwrap(), &["one", "two"]);
    }

    #[test]
    fn test_tokens_cached_after_first_access() {
        let doc = TextDocument::new("a b c");
        assert!(!doc.tokens_cached());
        let first: Vec<String> = doc.tokens().unwrap().to_vec();
        assert!(doc.tokens_cached());
        assert_eq!(doc.tokens().unwrap(), first.as_slice());
    }

    #[test]
    fn test_is_empty() {
        assert!(TextDocument::new("").is_empty());
        assert!(TextDocument::new("   \n\t").is_empty());
        assert!(!TextDocument::new("x").is_empty());
    }

    #[test]
    fn test_metadata_and_source_path() {
        let doc = TextDocument::new("body")
            .with_source_path("notes/readme.md")
            .with_metadata("format", "markdown");
        assert_eq!(doc.source_path().unwrap().to_str(), Some("notes/readme.md"));
        assert_eq!(doc.metadata().get("format").map(String::as_str), Some("markdown"));
    }
}
