//! Stopword-overlap language detector.
//!
//! For each configured language the detector computes the fraction of
//! document tokens (with multiplicity) found in that language's stopword
//! set. The highest fraction wins; ties go to the language declared first
//! in the table. A best fraction of zero, or one below the minimum
//! confidence, reports "unknown" instead of guessing.
//!
//! # Examples
//!
//! ```
//! use shrike::analyze::{Analyzer, LanguageDetector};
//! use shrike::config::StopwordTable;
//! use shrike::document::TextDocument;
//!
//! let detector = LanguageDetector::new(StopwordTable::builtin());
//! let doc = TextDocument::new("the and of the with");
//! let metrics = detector.analyze(&doc).unwrap();
//!
//! assert_eq!(metrics["language_code"], "en");
//! ```

use serde_json::json;
use tracing::debug;

use super::{Analyzer, Metrics};
use crate::config::StopwordTable;
use crate::document::TextDocument;
use crate::error::Result;

/// Analyzer guessing the document language from stopword overlap.
#[derive(Clone, Debug)]
pub struct LanguageDetector {
    stopwords: StopwordTable,
    min_confidence: f64,
}

impl LanguageDetector {
    /// Create a detector over the given stopword table with the default
    /// minimum confidence of 0.1.
    pub fn new(stopwords: StopwordTable) -> Self {
        LanguageDetector {
            stopwords,
            min_confidence: 0.1,
        }
    }

    /// Set the minimum confidence below which detection reports "unknown".
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(StopwordTable::builtin())
    }
}

impl Analyzer for LanguageDetector {
    fn analyze(&self, document: &TextDocument) -> Result<Metrics> {
        let tokens = document.tokens()?;

        let mut metrics = Metrics::new();
        if tokens.is_empty() {
            metrics.insert("language_code".to_string(), json!("unknown"));
            metrics.insert("language_confidence".to_string(), json!(0.0));
            return Ok(metrics);
        }

        // Strictly-greater comparison keeps the first declared language on
        // ties, which is the table's priority order.
        let mut best: Option<(&str, f64)> = None;
        for (code, words) in self.stopwords.iter() {
            let hits = tokens.iter().filter(|t| words.contains(t.as_str())).count();
            let fraction = hits as f64 / tokens.len() as f64;
            debug!(language = code, fraction, "stopword overlap");
            if best.is_none_or(|(_, best_fraction)| fraction > best_fraction) {
                best = Some((code, fraction));
            }
        }

        let (code, confidence) = match best {
            Some((code, fraction)) if fraction > 0.0 && fraction >= self.min_confidence => {
                (code, fraction)
            }
            Some((_, fraction)) => ("unknown", fraction),
            None => ("unknown", 0.0),
        };

        debug!(language = code, confidence, "language detection completed");

        metrics.insert("language_code".to_string(), json!(code));
        metrics.insert("language_confidence".to_string(), json!(confidence));
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "language"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StopwordTable {
        StopwordTable::new()
            .with_language("en", ["the", "and", "of"])
            .with_language("es", ["el", "la", "de"])
    }

    #[test]
    fn test_pure_english_full_confidence() {
        let detector = LanguageDetector::new(table());
        let doc = TextDocument::new("the and of the");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "en");
        assert_eq!(metrics["language_confidence"].as_f64().unwrap(), 1.0);
    }

    #[test]
    fn test_spanish_detection() {
        let detector = LanguageDetector::new(table());
        let doc = TextDocument::new("el gato y la casa de madera");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "es");
    }

    #[test]
    fn test_no_overlap_is_unknown() {
        let detector = LanguageDetector::new(table());
        let doc = TextDocument::new("zzz qqq xxx");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "unknown");
        assert_eq!(metrics["language_confidence"].as_f64().unwrap(), 0.0);
    }

    #[test]
    fn test_below_threshold_is_unknown() {
        let detector = LanguageDetector::new(table()).with_min_confidence(0.5);
        // 1 of 4 tokens is an English stopword: fraction 0.25 < 0.5.
        let doc = TextDocument::new("the quantum flux capacitor");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "unknown");
        assert_eq!(metrics["language_confidence"].as_f64().unwrap(), 0.25);
    }

    #[test]
    fn test_tie_broken_by_declaration_order() {
        // "de" appears in both tables; put it in both and watch priority.
        let table = StopwordTable::new()
            .with_language("fr", ["de"])
            .with_language("es", ["de"]);
        let detector = LanguageDetector::new(table);
        let doc = TextDocument::new("de de de");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "fr");
    }

    #[test]
    fn test_empty_document_is_unknown() {
        let detector = LanguageDetector::new(table());
        let doc = TextDocument::new("");
        let metrics = detector.analyze(&doc).unwrap();
        assert_eq!(metrics["language_code"], "unknown");
    }
}
