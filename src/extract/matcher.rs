//! Regex pattern matcher, the base extraction primitive.
//!
//! A [`PatternMatcher`] compiles an ordered list of regular expressions
//! once, caches them for its lifetime, and applies them to text in
//! declaration order. Matches are concatenated per pattern (pattern 1's
//! matches, then pattern 2's), not interleaved by text position.
//!
//! # Examples
//!
//! ```
//! use shrike::extract::PatternMatcher;
//!
//! let matcher = PatternMatcher::new(&[r"\d{3}-\d{4}"]).unwrap();
//! let matches = matcher.extract("call 555-1234 or 555-9876", false);
//! assert_eq!(matches, vec!["555-1234", "555-9876"]);
//! ```

use ahash::AHashSet;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, ShrikeError};

/// An ordered set of compiled regular expressions applied to text.
///
/// Construction fails with a configuration error if the pattern list is
/// empty or any pattern does not compile; extraction itself never fails.
/// Pattern mutation is additive only: [`add_patterns`](Self::add_patterns)
/// extends the set without discarding already-compiled patterns.
#[derive(Clone, Debug)]
pub struct PatternMatcher {
    patterns: Vec<Regex>,
}

impl PatternMatcher {
    /// Compile a non-empty ordered list of patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(ShrikeError::configuration("empty pattern list"));
        }
        let mut matcher = PatternMatcher {
            patterns: Vec::with_capacity(patterns.len()),
        };
        matcher.add_patterns(patterns)?;
        Ok(matcher)
    }

    /// Append patterns to the existing set, extending future extraction
    /// coverage.
    pub fn add_patterns<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<()> {
        for pattern in patterns {
            let compiled = Regex::new(pattern.as_ref()).map_err(|e| {
                ShrikeError::configuration(format!(
                    "invalid regex pattern '{}': {e}",
                    pattern.as_ref()
                ))
            })?;
            debug!(pattern = pattern.as_ref(), "added pattern");
            self.patterns.push(compiled);
        }
        Ok(())
    }

    /// Apply every pattern to `text` in declaration order and collect all
    /// non-overlapping matches.
    ///
    /// With `unique_occurrences`, duplicate strings are dropped while the
    /// first occurrence keeps its position.
    pub fn extract(&self, text: &str, unique_occurrences: bool) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for pattern in &self.patterns {
            for mat in pattern.find_iter(text) {
                results.push(mat.as_str().to_string());
            }
        }

        if unique_occurrences {
            let mut seen = AHashSet::with_capacity(results.len());
            results.retain(|m| seen.insert(m.clone()));
        }

        debug!(
            matches = results.len(),
            unique_occurrences, "extraction completed"
        );
        results
    }

    /// The registered pattern sources, in declaration order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.as_str()).collect()
    }

    /// Number of registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
