//! Document analyzers producing named metric sets.
//!
//! Every analyzer consumes the document's token sequence as-is (lowercasing
//! and cleaning are the transformer pipeline's job) and emits a flat metric
//! map. Metric keys are prefixed with the analyzer name, so merging the
//! maps in the [`runner::AnalyzerRunner`] never collides.

use serde_json::Value;

use crate::document::TextDocument;
use crate::error::Result;

/// A flat mapping from metric name to value.
///
/// Plain JSON values keep the result directly serializable at the result
/// boundary.
pub type Metrics = serde_json::Map<String, Value>;

/// Trait for analyzers that compute a named metric set from a document.
pub trait Analyzer: Send + Sync {
    /// Analyze the document and return the metric map.
    fn analyze(&self, document: &TextDocument) -> Result<Metrics>;

    /// Get the name of this analyzer, which prefixes its metric keys.
    fn name(&self) -> &'static str;
}

pub mod frequency;
pub mod language;
pub mod readability;
pub mod runner;
pub mod sentiment;

pub use frequency::FrequencyAnalyzer;
pub use language::LanguageDetector;
pub use readability::ReadabilityAnalyzer;
pub use runner::AnalyzerRunner;
pub use sentiment::SentimentAnalyzer;
