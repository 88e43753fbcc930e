//! Analyzer runner: selective composition of analyzers.
//!
//! Mirrors the extractor runner: analyzers are selected by name through an
//! explicit registry, run against the same document, and their metric maps
//! merge into one flat result. Analyzers namespace their keys by
//! convention, so the merge never arbitrates collisions; two analyzers
//! emitting the same key is a bug caught by tests.
//!
//! # Examples
//!
//! ```
//! use shrike::analyze::AnalyzerRunner;
//! use shrike::config::AnalysisConfig;
//! use shrike::document::TextDocument;
//!
//! let runner = AnalyzerRunner::new(&AnalysisConfig::default()).unwrap();
//! let doc = TextDocument::new("the good text is good");
//! let metrics = runner.analyze_all(&doc).unwrap();
//!
//! assert_eq!(metrics["sentiment_label"], "positive");
//! assert_eq!(metrics["language_code"], "en");
//! ```

use tracing::{debug, info, warn};

use super::{
    Analyzer, FrequencyAnalyzer, LanguageDetector, Metrics, ReadabilityAnalyzer, SentimentAnalyzer,
};
use crate::config::AnalysisConfig;
use crate::document::TextDocument;
use crate::error::Result;

/// Names of the core analyzers, in registry order.
pub const CORE_ANALYZERS: &[&str] = &["frequency", "sentiment", "readability", "language"];

fn build_core(name: &str, config: &AnalysisConfig) -> Option<Box<dyn Analyzer>> {
    match name {
        "frequency" => Some(Box::new(FrequencyAnalyzer::new().with_top_n(config.top_n))),
        "sentiment" => Some(Box::new(SentimentAnalyzer::new(config.sentiment.clone()))),
        "readability" => Some(Box::new(ReadabilityAnalyzer::new(config.readability.clone()))),
        "language" => Some(Box::new(
            LanguageDetector::new(config.stopwords.clone())
                .with_min_confidence(config.min_language_confidence),
        )),
        _ => None,
    }
}

/// Runs a selectable subset of analyzers and consolidates their metrics.
pub struct AnalyzerRunner {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalyzerRunner {
    /// Create a runner with all core analyzers, validating the supplied
    /// configuration tables first.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        Self::with_selection(config, CORE_ANALYZERS)
    }

    /// Create a runner with only the named core analyzers. An empty
    /// selection activates all of them; unknown names are logged and
    /// skipped.
    pub fn with_selection<S: AsRef<str>>(config: &AnalysisConfig, names: &[S]) -> Result<Self> {
        if names.is_empty() {
            return Self::new(config);
        }

        config.validate()?;

        let mut analyzers: Vec<Box<dyn Analyzer>> = Vec::new();
        for name in names {
            match build_core(name.as_ref(), config) {
                Some(analyzer) => analyzers.push(analyzer),
                None => warn!(name = name.as_ref(), "unknown analyzer name, skipping"),
            }
        }
        info!(active = analyzers.len(), "initialized analyzer runner");
        Ok(AnalyzerRunner { analyzers })
    }

    /// Attach an additional analyzer.
    pub fn add_analyzer(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Names of the active analyzers, in activation order.
    pub fn active_analyzers(&self) -> Vec<&str> {
        self.analyzers.iter().map(|a| a.name()).collect()
    }

    /// Run every active analyzer and merge the metric maps.
    pub fn analyze_all(&self, document: &TextDocument) -> Result<Metrics> {
        let mut merged = Metrics::new();
        info!(analyzers = self.analyzers.len(), "starting analysis");

        for analyzer in &self.analyzers {
            let metrics = analyzer.analyze(document)?;
            debug!(
                analyzer = analyzer.name(),
                metrics = metrics.len(),
                "analyzer completed"
            );
            merged.extend(metrics);
        }

        info!(metrics = merged.len(), "analysis completed");
        Ok(merged)
    }
}

impl std::fmt::Debug for AnalyzerRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRunner")
            .field("analyzers", &self.active_analyzers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_core_analyzers_by_default() {
        let runner = AnalyzerRunner::new(&AnalysisConfig::default()).unwrap();
        assert_eq!(
            runner.active_analyzers(),
            vec!["frequency", "sentiment", "readability", "language"]
        );
    }

    #[test]
    fn test_selection_runs_only_requested() {
        let config = AnalysisConfig::default();
        let runner = AnalyzerRunner::with_selection(&config, &["sentiment"]).unwrap();
        let doc = TextDocument::new("good text");
        let metrics = runner.analyze_all(&doc).unwrap();

        assert!(metrics.contains_key("sentiment_label"));
        assert!(!metrics.contains_key("frequency_total_tokens"));
        assert!(!metrics.contains_key("language_code"));
    }

    #[test]
    fn test_unknown_name_skipped() {
        let config = AnalysisConfig::default();
        let runner = AnalyzerRunner::with_selection(&config, &["frequency", "astrology"]).unwrap();
        assert_eq!(runner.active_analyzers(), vec!["frequency"]);
    }

    #[test]
    fn test_empty_selection_activates_all_core() {
        let config = AnalysisConfig::default();
        let runner = AnalyzerRunner::with_selection(&config, &[] as &[&str]).unwrap();
        assert_eq!(
            runner.active_analyzers(),
            vec!["frequency", "sentiment", "readability", "language"]
        );
    }

    #[test]
    fn test_metric_namespaces_are_disjoint() {
        let config = AnalysisConfig::default();
        let doc = TextDocument::new("the good text. more good text!");

        // Contract check: summed per-analyzer key counts equal the merged
        // key count, so no analyzer overwrote another's metric.
        let runner = AnalyzerRunner::new(&config).unwrap();
        let merged = runner.analyze_all(&doc).unwrap();

        let mut expected = 0;
        for name in CORE_ANALYZERS {
            let single = AnalyzerRunner::with_selection(&config, &[name]).unwrap();
            expected += single.analyze_all(&doc).unwrap().len();
        }
        assert_eq!(merged.len(), expected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalysisConfig::default();
        config.readability.boundaries.clear();
        assert!(AnalyzerRunner::new(&config).is_err());
    }

    #[test]
    fn test_runs_on_empty_document() {
        let runner = AnalyzerRunner::new(&AnalysisConfig::default()).unwrap();
        let doc = TextDocument::new("");
        let metrics = runner.analyze_all(&doc).unwrap();
        assert_eq!(metrics["frequency_total_tokens"], 0);
        assert_eq!(metrics["language_code"], "unknown");
        assert_eq!(metrics["readability_category"], "unknown");
    }
}
