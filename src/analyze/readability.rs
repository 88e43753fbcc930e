//! Readability analyzer.
//!
//! Combines average sentence length (tokens per sentence) and average word
//! length (graphemes per token) into a complexity score, then maps the
//! score onto the configured ordered boundaries. Each boundary is an
//! inclusive upper bound; scores above the highest boundary fall into the
//! catch-all category.
//!
//! Sentences are delimited by the configured terminal punctuation in the
//! raw, untransformed text. When the text contains no terminator at all,
//! the sentence count is approximated from the token count instead.

use serde_json::json;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use super::{Analyzer, Metrics};
use crate::config::ReadabilityConfig;
use crate::document::TextDocument;
use crate::error::Result;

/// Assumed tokens per sentence when the text has no sentence boundaries.
const FALLBACK_TOKENS_PER_SENTENCE: f64 = 20.0;

/// Analyzer classifying documents into readability categories.
///
/// # Examples
///
/// ```
/// use shrike::analyze::{Analyzer, ReadabilityAnalyzer};
/// use shrike::config::ReadabilityConfig;
/// use shrike::document::TextDocument;
///
/// let analyzer = ReadabilityAnalyzer::new(ReadabilityConfig::builtin());
/// let doc = TextDocument::new("Short words. Easy text.");
/// let metrics = analyzer.analyze(&doc).unwrap();
///
/// assert_eq!(metrics["readability_category"], "low");
/// ```
#[derive(Clone, Debug)]
pub struct ReadabilityAnalyzer {
    config: ReadabilityConfig,
}

impl ReadabilityAnalyzer {
    /// Create an analyzer over the given threshold configuration.
    pub fn new(config: ReadabilityConfig) -> Self {
        ReadabilityAnalyzer { config }
    }

    fn sentence_count(&self, content: &str, token_count: usize) -> f64 {
        let has_terminator = content
            .chars()
            .any(|c| self.config.sentence_terminators.contains(&c));

        if has_terminator {
            let count = content
                .split(|c| self.config.sentence_terminators.contains(&c))
                .filter(|s| !s.trim().is_empty())
                .count();
            count.max(1) as f64
        } else {
            (token_count as f64 / FALLBACK_TOKENS_PER_SENTENCE).ceil().max(1.0)
        }
    }

    fn categorize(&self, score: f64) -> &str {
        for band in &self.config.boundaries {
            if score <= band.upper {
                return &band.label;
            }
        }
        &self.config.catch_all
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new(ReadabilityConfig::builtin())
    }
}

impl Analyzer for ReadabilityAnalyzer {
    fn analyze(&self, document: &TextDocument) -> Result<Metrics> {
        let tokens = document.tokens()?;

        let mut metrics = Metrics::new();
        if tokens.is_empty() {
            metrics.insert("readability_score".to_string(), json!(0.0));
            metrics.insert("readability_category".to_string(), json!("unknown"));
            metrics.insert("readability_avg_word_length".to_string(), json!(0.0));
            metrics.insert("readability_avg_sentence_length".to_string(), json!(0.0));
            return Ok(metrics);
        }

        let sentences = self.sentence_count(document.content(), tokens.len());
        let avg_sentence_length = tokens.len() as f64 / sentences;
        let total_graphemes: usize = tokens.iter().map(|t| t.graphemes(true).count()).sum();
        let avg_word_length = total_graphemes as f64 / tokens.len() as f64;

        let score = avg_sentence_length + avg_word_length;
        let category = self.categorize(score);

        debug!(score, category, "readability analysis completed");

        metrics.insert("readability_score".to_string(), json!(score));
        metrics.insert("readability_category".to_string(), json!(category));
        metrics.insert("readability_avg_word_length".to_string(), json!(avg_word_length));
        metrics.insert(
            "readability_avg_sentence_length".to_string(),
            json!(avg_sentence_length),
        );
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "readability"
    }
}
