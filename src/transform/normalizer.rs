//! Case and whitespace normalizer with accent stripping.

use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::TextStage;
use crate::error::Result;

/// A stage that lowercases text, strips accents, and collapses whitespace.
///
/// Accents are removed by NFKD decomposition followed by dropping combining
/// marks, so "café" normalizes to "cafe". Runs of whitespace collapse to a
/// single space and the result is trimmed.
///
/// # Examples
///
/// ```
/// use shrike::transform::{Normalizer, TextStage};
///
/// let normalizer = Normalizer::new();
/// assert_eq!(normalizer.apply("  Crème   BRÛLÉE ").unwrap(), "creme brulee");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Normalizer
    }
}

impl TextStage for Normalizer {
    fn apply(&self, text: &str) -> Result<String> {
        let lowered = text.to_lowercase();
        let stripped: String = lowered.nfkd().filter(|c| !is_combining_mark(*c)).collect();

        let mut normalized = String::with_capacity(stripped.len());
        let mut in_whitespace = false;
        for c in stripped.trim().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    normalized.push(' ');
                }
                in_whitespace = true;
            } else {
                normalized.push(c);
                in_whitespace = false;
            }
        }

        debug!(input_len = text.len(), output_len = normalized.len(), "normalized text");
        Ok(normalized)
    }

    fn name(&self) -> &'static str {
        "normalizer"
    }
}
