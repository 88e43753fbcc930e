//! Keyword-based sentiment analyzer.
//!
//! Polarity is `(positive_hits - negative_hits) / max(1, total_hits)`, so a
//! document with no sentiment keywords scores 0.0 instead of tripping a
//! division fault. Any positive polarity labels the document "positive",
//! any negative polarity "negative", zero is "neutral".
//!
//! # Examples
//!
//! ```
//! use shrike::analyze::{Analyzer, SentimentAnalyzer};
//! use shrike::config::SentimentLexicon;
//! use shrike::document::TextDocument;
//!
//! let analyzer = SentimentAnalyzer::new(SentimentLexicon::english());
//! let doc = TextDocument::new("what a great and reliable tool");
//! let metrics = analyzer.analyze(&doc).unwrap();
//!
//! assert_eq!(metrics["sentiment_label"], "positive");
//! ```

use serde_json::json;
use tracing::debug;

use super::{Analyzer, Metrics};
use crate::config::SentimentLexicon;
use crate::document::TextDocument;
use crate::error::Result;

/// Analyzer estimating sentiment polarity from keyword hits.
#[derive(Clone, Debug)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    /// Create an analyzer over the given keyword sets.
    pub fn new(lexicon: SentimentLexicon) -> Self {
        SentimentAnalyzer { lexicon }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(SentimentLexicon::english())
    }
}

impl Analyzer for SentimentAnalyzer {
    fn analyze(&self, document: &TextDocument) -> Result<Metrics> {
        let tokens = document.tokens()?;

        let positive_hits = tokens
            .iter()
            .filter(|t| self.lexicon.positive.contains(t.as_str()))
            .count();
        let negative_hits = tokens
            .iter()
            .filter(|t| self.lexicon.negative.contains(t.as_str()))
            .count();

        let total = positive_hits + negative_hits;
        let polarity = (positive_hits as f64 - negative_hits as f64) / total.max(1) as f64;
        let label = if polarity > 0.0 {
            "positive"
        } else if polarity < 0.0 {
            "negative"
        } else {
            "neutral"
        };

        debug!(polarity, label, positive_hits, negative_hits, "sentiment analysis completed");

        let mut metrics = Metrics::new();
        metrics.insert("sentiment_polarity".to_string(), json!(polarity));
        metrics.insert("sentiment_label".to_string(), json!(label));
        metrics.insert("sentiment_positive_hits".to_string(), json!(positive_hits));
        metrics.insert("sentiment_negative_hits".to_string(), json!(negative_hits));
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> SentimentLexicon {
        SentimentLexicon::from_words(["good"], ["bad"])
    }

    #[test]
    fn test_positive_polarity() {
        let analyzer = SentimentAnalyzer::new(lexicon());
        let doc = TextDocument::new("good good bad");
        let metrics = analyzer.analyze(&doc).unwrap();

        let polarity = metrics["sentiment_polarity"].as_f64().unwrap();
        assert!((polarity - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics["sentiment_label"], "positive");
        assert_eq!(metrics["sentiment_positive_hits"], 2);
        assert_eq!(metrics["sentiment_negative_hits"], 1);
    }

    #[test]
    fn test_negative_polarity() {
        let analyzer = SentimentAnalyzer::new(lexicon());
        let doc = TextDocument::new("bad bad good");
        let metrics = analyzer.analyze(&doc).unwrap();
        assert_eq!(metrics["sentiment_label"], "negative");
    }

    #[test]
    fn test_zero_hits_is_neutral() {
        let analyzer = SentimentAnalyzer::new(lexicon());
        let doc = TextDocument::new("entirely factual prose");
        let metrics = analyzer.analyze(&doc).unwrap();
        assert_eq!(metrics["sentiment_polarity"].as_f64().unwrap(), 0.0);
        assert_eq!(metrics["sentiment_label"], "neutral");
    }

    #[test]
    fn test_balanced_hits_is_neutral() {
        let analyzer = SentimentAnalyzer::new(lexicon());
        let doc = TextDocument::new("good bad");
        let metrics = analyzer.analyze(&doc).unwrap();
        assert_eq!(metrics["sentiment_label"], "neutral");
    }

    #[test]
    fn test_empty_document() {
        let analyzer = SentimentAnalyzer::new(lexicon());
        let doc = TextDocument::new("");
        let metrics = analyzer.analyze(&doc).unwrap();
        assert_eq!(metrics["sentiment_polarity"].as_f64().unwrap(), 0.0);
        assert_eq!(metrics["sentiment_label"], "neutral");
    }
}
