//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on whitespace boundaries.
///
/// Empty tokens never occur in the output; consecutive whitespace counts as
/// a single boundary.
///
/// # Examples
///
/// ```
/// use shrike::transform::{Tokenizer, WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("hello  brave world").unwrap();
/// assert_eq!(tokens, vec!["hello", "brave", "world"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split_whitespace().map(|s| s.to_string()).collect())
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
