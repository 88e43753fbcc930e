//! Token frequency analyzer.
//!
//! Counts tokens case-sensitively as received. Ties among equally frequent
//! tokens are broken by first occurrence in the document, so the top list
//! is deterministic.
//!
//! # Examples
//!
//! ```
//! use shrike::analyze::{Analyzer, FrequencyAnalyzer};
//! use shrike::document::TextDocument;
//!
//! let analyzer = FrequencyAnalyzer::new();
//! let doc = TextDocument::new("to be or not to be");
//! let metrics = analyzer.analyze(&doc).unwrap();
//!
//! assert_eq!(metrics["frequency_total_tokens"], 6);
//! assert_eq!(metrics["frequency_unique_tokens"], 4);
//! ```

use ahash::AHashMap;
use serde_json::{Value, json};
use tracing::debug;

use super::{Analyzer, Metrics};
use crate::document::TextDocument;
use crate::error::Result;

/// Analyzer reporting total/unique token counts and the top-N tokens.
#[derive(Clone, Debug)]
pub struct FrequencyAnalyzer {
    top_n: usize,
}

impl FrequencyAnalyzer {
    /// Create an analyzer reporting the top 10 tokens.
    pub fn new() -> Self {
        FrequencyAnalyzer { top_n: 10 }
    }

    /// Set how many top tokens to report.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

impl Default for FrequencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for FrequencyAnalyzer {
    fn analyze(&self, document: &TextDocument) -> Result<Metrics> {
        let tokens = document.tokens()?;

        // (count, first occurrence index) per token; the index is the
        // tie-break for the top list.
        let mut counts: AHashMap<&str, (usize, usize)> = AHashMap::new();
        let mut length_counts: AHashMap<usize, usize> = AHashMap::new();
        for (i, token) in tokens.iter().enumerate() {
            counts
                .entry(token.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, i));
            *length_counts.entry(token.chars().count()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize, usize)> = counts
            .iter()
            .map(|(token, (count, first))| (*token, *count, *first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(self.top_n);

        let most_common_length = length_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            .map(|(len, _)| *len)
            .unwrap_or(0);

        debug!(
            total = tokens.len(),
            unique = counts.len(),
            "frequency analysis completed"
        );

        let top_tokens: Vec<Value> = ranked
            .into_iter()
            .map(|(token, count, _)| json!({"token": token, "count": count}))
            .collect();

        let mut metrics = Metrics::new();
        metrics.insert("frequency_total_tokens".to_string(), json!(tokens.len()));
        metrics.insert("frequency_unique_tokens".to_string(), json!(counts.len()));
        metrics.insert("frequency_top_tokens".to_string(), Value::Array(top_tokens));
        metrics.insert(
            "frequency_most_common_length".to_string(),
            json!(most_common_length),
        );
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}
