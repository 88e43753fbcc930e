//! Email address extractor.

use tracing::debug;

use super::{Extractor, PatternMatcher};
use crate::error::Result;

/// Patterns covering local-part + "@" + domain + TLD, including subdomains
/// and plus-tags.
const EMAIL_PATTERNS: &[&str] = &[r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"];

/// Extractor for email addresses.
///
/// Matches standard addresses like `user@example.com` as well as
/// `user.name+tag@sub.example.co.uk`.
///
/// # Examples
///
/// ```
/// use shrike::extract::{EmailExtractor, Extractor};
///
/// let extractor = EmailExtractor::new().unwrap();
/// let matches = extractor.extract("Reach me at dev@example.org", false).unwrap();
/// assert_eq!(matches, vec!["dev@example.org"]);
/// ```
#[derive(Clone, Debug)]
pub struct EmailExtractor {
    matcher: PatternMatcher,
}

impl EmailExtractor {
    /// Create a new email extractor with the built-in pattern set.
    pub fn new() -> Result<Self> {
        let matcher = PatternMatcher::new(EMAIL_PATTERNS)?;
        debug!(patterns = matcher.pattern_count(), "initialized email extractor");
        Ok(EmailExtractor { matcher })
    }
}

impl Extractor for EmailExtractor {
    fn extract(&self, text: &str, unique_occurrences: bool) -> Result<Vec<String>> {
        Ok(self.matcher.extract(text, unique_occurrences))
    }

    fn name(&self) -> &str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_and_tagged_addresses() {
        let extractor = EmailExtractor::new().unwrap();
        let matches = extractor
            .extract(
                "Contact admin@example.com and user.name+tag@sub.example.co.uk",
                false,
            )
            .unwrap();
        assert_eq!(
            matches,
            vec!["admin@example.com", "user.name+tag@sub.example.co.uk"]
        );
    }

    #[test]
    fn test_no_match_on_plain_text() {
        let extractor = EmailExtractor::new().unwrap();
        assert!(extractor.extract("no addresses here", false).unwrap().is_empty());
    }

    #[test]
    fn test_extractor_name() {
        assert_eq!(EmailExtractor::new().unwrap().name(), "email");
    }
}
