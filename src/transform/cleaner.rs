//! Punctuation cleaner that protects structured spans.
//!
//! The cleaner strips punctuation and special characters from free text, but
//! emails, URLs, dates, and percentage figures are located first and
//! protected from mutation so downstream extraction still sees them intact.
//!
//! # Examples
//!
//! ```
//! use shrike::transform::{Cleaner, TextStage};
//!
//! let cleaner = Cleaner::new().unwrap();
//! let cleaned = cleaner.apply("Hello!! Mail admin@example.com, ok?").unwrap();
//! assert_eq!(cleaned, "Hello Mail admin@example.com ok");
//! ```

use regex::Regex;
use tracing::debug;

use super::TextStage;
use crate::error::{Result, ShrikeError};

const MONTHS: &str = "Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|\
Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?";

/// Spans matching these patterns survive cleaning untouched.
fn protected_pattern_sources() -> Vec<String> {
    vec![
        // Emails
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b".to_string(),
        // http/https/ftp URLs
        r"\b(?:https?|ftp)://[^\s]+\b".to_string(),
        // Bare www hosts
        r"\bwww\.[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?:/[^\s]*)?".to_string(),
        // Percentages like 12.5%
        r"\b\d+(?:[.,]\d+)?%".to_string(),
        // ISO-style dates with -, / or . separators
        r"\b\d{4}[-/.]\d{2}[-/.]\d{2}\b".to_string(),
        // Numeric day-first/month-first dates
        r"\b\d{2}[/-]\d{2}[/-]\d{4}\b".to_string(),
        // "March 3rd, 2025"
        format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
        // "15 Aug 2025"
        format!(r"(?i)\b\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}}\b"),
    ]
}

/// A stage that removes punctuation noise while preserving structured data.
///
/// Protected spans are located by byte range on the original text and
/// copied through verbatim; only the text between them goes through the
/// punctuation sweep. A span like `user@example.com` is never torn apart,
/// and input that happens to look like an internal marker cannot be
/// mistaken for one.
#[derive(Clone, Debug)]
pub struct Cleaner {
    protected: Vec<Regex>,
    punctuation: Regex,
    whitespace: Regex,
}

impl Cleaner {
    /// Create a new cleaner with the built-in protected span patterns.
    pub fn new() -> Result<Self> {
        let protected = protected_pattern_sources()
            .iter()
            .map(|p| {
                Regex::new(p)
                    .map_err(|e| ShrikeError::configuration(format!("invalid regex pattern: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Cleaner {
            protected,
            punctuation: Regex::new(r"[^\w\s]")
                .map_err(|e| ShrikeError::configuration(format!("invalid regex pattern: {e}")))?,
            whitespace: Regex::new(r"\s+")
                .map_err(|e| ShrikeError::configuration(format!("invalid regex pattern: {e}")))?,
        })
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new().expect("Built-in cleaner patterns should be valid")
    }
}

impl Cleaner {
    /// Byte ranges of protected spans in `text`, non-overlapping and in
    /// ascending order. Where spans overlap, the earlier start wins, then
    /// the longer span.
    fn protected_ranges(&self, text: &str) -> Vec<(usize, usize)> {
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for pattern in &self.protected {
            for mat in pattern.find_iter(text) {
                ranges.push((mat.start(), mat.end()));
            }
        }
        ranges.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut merged: Vec<(usize, usize)> = Vec::new();
        for (start, end) in ranges {
            match merged.last() {
                Some(&(_, last_end)) if start < last_end => {}
                _ => merged.push((start, end)),
            }
        }
        merged
    }

    fn sweep(&self, segment: &str) -> String {
        let depunctuated = self.punctuation.replace_all(segment, " ");
        self.whitespace.replace_all(&depunctuated, " ").into_owned()
    }
}

impl TextStage for Cleaner {
    fn apply(&self, text: &str) -> Result<String> {
        let ranges = self.protected_ranges(text);
        debug!(protected = ranges.len(), "protected spans before cleaning");

        let mut cleaned = String::with_capacity(text.len());
        let mut cursor = 0;
        for &(start, end) in &ranges {
            cleaned.push_str(&self.sweep(&text[cursor..start]));
            cleaned.push_str(&text[start..end]);
            cursor = end;
        }
        cleaned.push_str(&self.sweep(&text[cursor..]));

        Ok(cleaned.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "cleaner"
    }
}
