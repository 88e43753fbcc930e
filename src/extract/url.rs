//! URL extractor.

use tracing::debug;

use super::{Extractor, PatternMatcher};
use crate::error::Result;

/// Patterns covering http/https, ftp, and bare `www.` hosts with optional
/// path and query.
const URL_PATTERNS: &[&str] = &[
    r"https?://(?:[-\w./?%&=+#~:]|%[\da-fA-F]{2})+",
    r"ftp://(?:[-\w./?%&=+#~:]|%[\da-fA-F]{2})+",
    r"www\.(?:[-\w./?%&=+#~:]|%[\da-fA-F]{2})+",
];

/// Extractor for URLs.
///
/// Supports `http://`, `https://`, `ftp://`, and protocol-less
/// `www.`-prefixed hosts.
///
/// # Examples
///
/// ```
/// use shrike::extract::{Extractor, UrlExtractor};
///
/// let extractor = UrlExtractor::new().unwrap();
/// let matches = extractor.extract("docs at https://example.com/guide", false).unwrap();
/// assert_eq!(matches, vec!["https://example.com/guide"]);
/// ```
#[derive(Clone, Debug)]
pub struct UrlExtractor {
    matcher: PatternMatcher,
}

impl UrlExtractor {
    /// Create a new URL extractor with the built-in pattern set.
    pub fn new() -> Result<Self> {
        let matcher = PatternMatcher::new(URL_PATTERNS)?;
        debug!(patterns = matcher.pattern_count(), "initialized url extractor");
        Ok(UrlExtractor { matcher })
    }
}

impl Extractor for UrlExtractor {
    fn extract(&self, text: &str, unique_occurrences: bool) -> Result<Vec<String>> {
        Ok(self.matcher.extract(text, unique_occurrences))
    }

    fn name(&self) -> &str {
        "url"
    }
}
