//! Pattern-based data extraction: matcher primitive, concrete extractors,
//! and the orchestrating runner.
//!
//! Extraction always operates on the document's raw, untokenized text so
//! multi-word and punctuated patterns (dates, URLs) remain intact.

use crate::error::Result;

/// Trait for extractors that collect pattern matches from text.
///
/// Any component exposing this signature composes with the
/// [`runner::ExtractorRunner`]; the built-in extractors never fail at
/// extraction time, the `Result` exists for caller-supplied
/// implementations.
pub trait Extractor: Send + Sync {
    /// Extract matches from `text`, optionally deduplicated while
    /// preserving first-occurrence order.
    fn extract(&self, text: &str, unique_occurrences: bool) -> Result<Vec<String>>;

    /// Get the name of this extractor, which keys its results.
    fn name(&self) -> &str;
}

pub mod custom;
pub mod date;
pub mod email;
pub mod matcher;
pub mod result;
pub mod runner;
pub mod url;

pub use custom::CustomExtractor;
pub use date::DateExtractor;
pub use email::EmailExtractor;
pub use matcher::PatternMatcher;
pub use result::ExtractionResult;
pub use runner::ExtractorRunner;
pub use url::UrlExtractor;
