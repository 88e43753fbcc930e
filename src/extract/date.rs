//! Date extractor.

use tracing::debug;

use super::{Extractor, PatternMatcher};
use crate::error::Result;

const MONTHS: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|\
Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Pattern sources covering the supported date format families, in
/// declaration order:
///
/// - ISO `YYYY-MM-DD` and the `YYYY.MM.DD` / `YYYY/MM/DD` variants
/// - numeric `MM/DD/YYYY` / `DD/MM/YYYY` and the hyphenated form
/// - written day-first forms like `15 Aug 2025` and `15-Aug-2025`
/// - written month-first forms like `March 3rd, 2025`
fn date_pattern_sources() -> Vec<String> {
    vec![
        r"\b\d{4}[-/.]\d{2}[-/.]\d{2}\b".to_string(),
        r"\b\d{2}/\d{2}/\d{4}\b".to_string(),
        r"\b\d{2}-\d{2}-\d{4}\b".to_string(),
        format!(r"(?i)\b\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}}\b"),
        format!(r"(?i)\b\d{{1,2}}-(?:{MONTHS})-\d{{4}}\b"),
        format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
    ]
}

/// Extractor for dates in ISO, numeric, and written formats.
///
/// # Examples
///
/// ```
/// use shrike::extract::{DateExtractor, Extractor};
///
/// let extractor = DateExtractor::new().unwrap();
/// let matches = extractor.extract("Released on 2025-06-27", false).unwrap();
/// assert_eq!(matches, vec!["2025-06-27"]);
/// ```
#[derive(Clone, Debug)]
pub struct DateExtractor {
    matcher: PatternMatcher,
}

impl DateExtractor {
    /// Create a new date extractor with the built-in pattern set.
    pub fn new() -> Result<Self> {
        let sources = date_pattern_sources();
        let matcher = PatternMatcher::new(&sources)?;
        debug!(patterns = matcher.pattern_count(), "initialized date extractor");
        Ok(DateExtractor { matcher })
    }
}

impl Extractor for DateExtractor {
    fn extract(&self, text: &str, unique_occurrences: bool) -> Result<Vec<String>> {
        Ok(self.matcher.extract(text, unique_occurrences))
    }

    fn name(&self) -> &str {
        "date"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_and_numeric_forms() {
        let extractor = DateExtractor::new().unwrap();
        let matches = extractor
            .extract("Meet on 2025-06-27 or 27/06/2025", false)
            .unwrap();
        assert_eq!(matches, vec!["2025-06-27", "27/06/2025"]);
    }

    #[test]
    fn test_iso_separator_variants() {
        let extractor = DateExtractor::new().unwrap();
        let matches = extractor
            .extract("2025.06.27 and 2025/06/27 and 27-06-2025", false)
            .unwrap();
        assert_eq!(matches, vec!["2025.06.27", "2025/06/27", "27-06-2025"]);
    }

    #[test]
    fn test_written_forms() {
        let extractor = DateExtractor::new().unwrap();
        let matches = extractor
            .extract("Due 15 Aug 2025, announced March 3rd, 2025.", false)
            .unwrap();
        assert_eq!(matches, vec!["15 Aug 2025", "March 3rd, 2025"]);
    }

    #[test]
    fn test_hyphenated_written_form() {
        let extractor = DateExtractor::new().unwrap();
        let matches = extractor.extract("shipped 01-Jan-2026", false).unwrap();
        assert_eq!(matches, vec!["01-Jan-2026"]);
    }

    #[test]
    fn test_extractor_name() {
        assert_eq!(DateExtractor::new().unwrap().name(), "date");
    }
}
