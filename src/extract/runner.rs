//! Extractor runner: selective composition of extractors.
//!
//! The runner holds only the extractors it was asked to build, keyed by
//! name through an explicit registry. Extraction runs against the
//! document's raw text, never its tokens, so dates and URLs survive
//! punctuation-aware matching.
//!
//! # Examples
//!
//! ```
//! use shrike::document::TextDocument;
//! use shrike::extract::ExtractorRunner;
//!
//! let runner = ExtractorRunner::new().unwrap();
//! let doc = TextDocument::new("Mail admin@example.com by 2025-06-27");
//! let result = runner.extract_all(&doc, true);
//!
//! assert_eq!(result.matches("email").unwrap(), &["admin@example.com"]);
//! assert_eq!(result.matches("date").unwrap(), &["2025-06-27"]);
//! ```

use tracing::{debug, info, warn};

use super::result::ExtractionResult;
use super::{DateExtractor, EmailExtractor, Extractor, UrlExtractor};
use crate::document::TextDocument;
use crate::error::Result;

/// Names of the core extractors, in registry order.
pub const CORE_EXTRACTORS: &[&str] = &["email", "url", "date"];

fn build_core(name: &str) -> Option<Result<Box<dyn Extractor>>> {
    match name {
        "email" => Some(EmailExtractor::new().map(|e| Box::new(e) as Box<dyn Extractor>)),
        "url" => Some(UrlExtractor::new().map(|e| Box::new(e) as Box<dyn Extractor>)),
        "date" => Some(DateExtractor::new().map(|e| Box::new(e) as Box<dyn Extractor>)),
        _ => None,
    }
}

/// Runs a selectable subset of extractors over a document and consolidates
/// their matches into one [`ExtractionResult`].
///
/// A failure in one extractor is isolated: it is recorded as an error
/// marker under that extractor's key and the others still complete.
pub struct ExtractorRunner {
    extractors: Vec<Box<dyn Extractor>>,
}

impl ExtractorRunner {
    /// Create a runner with all core extractors active.
    pub fn new() -> Result<Self> {
        Self::with_selection(CORE_EXTRACTORS)
    }

    /// Create a runner with only the named core extractors. An empty
    /// selection activates all of them; unknown names are logged and
    /// skipped, and only the selected extractors are ever instantiated.
    pub fn with_selection<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Self::new();
        }

        let mut extractors: Vec<Box<dyn Extractor>> = Vec::new();
        for name in names {
            match build_core(name.as_ref()) {
                Some(extractor) => extractors.push(extractor?),
                None => warn!(name = name.as_ref(), "unknown extractor name, skipping"),
            }
        }
        info!(
            active = extractors.len(),
            "initialized extractor runner"
        );
        Ok(ExtractorRunner { extractors })
    }

    /// Attach an additional extractor, typically a
    /// [`CustomExtractor`](super::CustomExtractor).
    pub fn add_extractor(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Names of the active extractors, in activation order.
    pub fn active_extractors(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }

    /// Run every active extractor against the document's raw text.
    ///
    /// Never fails as a whole: a failing extractor contributes an empty
    /// match list with an error marker instead of aborting the run.
    pub fn extract_all(&self, document: &TextDocument, unique_occurrences: bool) -> ExtractionResult {
        let mut result = ExtractionResult::new();
        info!(
            content_len = document.content().len(),
            extractors = self.extractors.len(),
            "starting extraction"
        );

        for extractor in &self.extractors {
            match extractor.extract(document.content(), unique_occurrences) {
                Ok(matches) => {
                    debug!(
                        extractor = extractor.name(),
                        matches = matches.len(),
                        "extractor completed"
                    );
                    result.record(extractor.name(), matches);
                }
                Err(e) => {
                    warn!(extractor = extractor.name(), error = %e, "extractor failed");
                    result.record_failure(extractor.name(), e.to_string());
                }
            }
        }

        info!(total = result.total_matches(), "extraction completed");
        result
    }
}

impl std::fmt::Debug for ExtractorRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRunner")
            .field("extractors", &self.active_extractors())
            .finish()
    }
}
