//! Extraction result record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Matches collected by a run of extractors, keyed by extractor name.
///
/// An absent key means the corresponding extractor was not requested; an
/// empty match list means it was requested but found nothing. A failed
/// extractor contributes an empty list plus an error marker under the same
/// key, so the rest of the run's results stay usable.
///
/// The record is a plain mapping of strings, suitable for direct
/// serialization at the result boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    matches: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    errors: BTreeMap<String, String>,
}

impl ExtractionResult {
    /// Create an empty result.
    pub fn new() -> Self {
        ExtractionResult::default()
    }

    /// Record the match list for an extractor.
    pub fn record<S: Into<String>>(&mut self, name: S, matches: Vec<String>) {
        self.matches.insert(name.into(), matches);
    }

    /// Record a failed extractor: an empty match list plus the error
    /// message as a marker.
    pub fn record_failure<S: Into<String>, E: Into<String>>(&mut self, name: S, error: E) {
        let name = name.into();
        self.matches.insert(name.clone(), Vec::new());
        self.errors.insert(name, error.into());
    }

    /// Matches for an extractor, or `None` if it was not requested.
    pub fn matches(&self, name: &str) -> Option<&[String]> {
        self.matches.get(name).map(|m| m.as_slice())
    }

    /// The error marker for an extractor, if it failed.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(|e| e.as_str())
    }

    /// Whether an extractor participated in the run.
    pub fn is_requested(&self, name: &str) -> bool {
        self.matches.contains_key(name)
    }

    /// Names of all extractors that participated, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.matches.keys().map(|k| k.as_str())
    }

    /// Total number of matches across all extractors.
    pub fn total_matches(&self) -> usize {
        self.matches.values().map(|m| m.len()).sum()
    }

    /// Whether any extractor failed.
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }
}
