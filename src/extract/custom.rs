//! User-defined pattern extractor.

use tracing::debug;

use super::{Extractor, PatternMatcher};
use crate::error::Result;

/// An extractor built from an entirely caller-supplied pattern set.
///
/// The name keys the results in an [`ExtractionResult`] alongside the
/// built-in extractors.
///
/// [`ExtractionResult`]: super::ExtractionResult
///
/// # Examples
///
/// ```
/// use shrike::extract::{CustomExtractor, Extractor};
///
/// let phones = CustomExtractor::new("phone", &[r"\d{3}-\d{3}-\d{4}"]).unwrap();
/// let matches = phones.extract("Call 555-123-4567", false).unwrap();
/// assert_eq!(matches, vec!["555-123-4567"]);
/// ```
#[derive(Clone, Debug)]
pub struct CustomExtractor {
    name: String,
    matcher: PatternMatcher,
}

impl CustomExtractor {
    /// Create an extractor from a name and a non-empty pattern list.
    pub fn new<S: AsRef<str>>(name: &str, patterns: &[S]) -> Result<Self> {
        let matcher = PatternMatcher::new(patterns)?;
        debug!(
            name,
            patterns = matcher.pattern_count(),
            "initialized custom extractor"
        );
        Ok(CustomExtractor {
            name: name.to_string(),
            matcher,
        })
    }

    /// Append patterns without discarding the existing set.
    pub fn add_patterns<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<()> {
        self.matcher.add_patterns(patterns)
    }

    /// The registered pattern sources.
    pub fn patterns(&self) -> Vec<&str> {
        self.matcher.patterns()
    }

    /// Number of registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.matcher.pattern_count()
    }
}

impl Extractor for CustomExtractor {
    fn extract(&self, text: &str, unique_occurrences: bool) -> Result<Vec<String>> {
        Ok(self.matcher.extract(text, unique_occurrences))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
