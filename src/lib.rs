//! # Shrike
//!
//! A heuristic text analysis and extraction library for Rust.
//!
//! Shrike ingests a text document and produces structured analytical and
//! extractive results: lexical statistics, keyword-based sentiment
//! polarity, readability classification, a stopword-overlap language
//! guess, and pattern-based data extraction (emails, URLs, dates, and
//! user-defined patterns) — optionally after a configurable
//! clean/normalize/tokenize pipeline.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Composable transformer pipeline with lazy per-document token caching
//! - Independent, selectable extractors and analyzers with isolated
//!   per-extractor failures
//! - Plain serializable result records
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use shrike::analyze::AnalyzerRunner;
//! use shrike::config::AnalysisConfig;
//! use shrike::document::TextDocument;
//! use shrike::extract::ExtractorRunner;
//! use shrike::transform::{Cleaner, Normalizer, TransformerPipeline, WhitespaceTokenizer};
//!
//! let pipeline = TransformerPipeline::new()
//!     .add_stage(Arc::new(Cleaner::new().unwrap()))
//!     .add_stage(Arc::new(Normalizer::new()))
//!     .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
//!
//! let doc = TextDocument::new("Great launch! Mail admin@example.com by 2025-06-27.")
//!     .with_pipeline(Arc::new(pipeline));
//!
//! let extraction = ExtractorRunner::new().unwrap().extract_all(&doc, true);
//! assert_eq!(extraction.matches("email").unwrap(), &["admin@example.com"]);
//!
//! let metrics = AnalyzerRunner::new(&AnalysisConfig::default())
//!     .unwrap()
//!     .analyze_all(&doc)
//!     .unwrap();
//! assert_eq!(metrics["sentiment_label"], "positive");
//! ```

pub mod analyze;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod transform;

pub mod prelude {
    //! Convenient re-exports of the commonly used types.

    pub use crate::analyze::{Analyzer, AnalyzerRunner, Metrics};
    pub use crate::config::AnalysisConfig;
    pub use crate::document::TextDocument;
    pub use crate::error::{Result, ShrikeError};
    pub use crate::extract::{ExtractionResult, Extractor, ExtractorRunner};
    pub use crate::transform::TransformerPipeline;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
