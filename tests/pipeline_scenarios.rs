//! Integration scenarios for the transformer pipeline and document model.

use std::sync::Arc;

use shrike::document::TextDocument;
use shrike::transform::{
    Cleaner, Normalizer, TextStage, TransformerPipeline, WhitespaceTokenizer,
};

#[test]
fn cleaner_preserves_structured_data_while_stripping_noise() {
    let cleaner = Cleaner::new().unwrap();
    let cleaned = cleaner
        .apply("Wow!!! Email admin@example.com, site https://example.com/x?y=1; due 2025-06-27...")
        .unwrap();

    assert!(cleaned.contains("admin@example.com"));
    assert!(cleaned.contains("https://example.com/x?y=1"));
    assert!(cleaned.contains("2025-06-27"));
    assert!(!cleaned.contains('!'));
    assert!(!cleaned.contains(';'));
}

#[test]
fn full_pipeline_produces_clean_lowercase_tokens() {
    let pipeline = TransformerPipeline::new()
        .add_stage(Arc::new(Cleaner::new().unwrap()))
        .add_stage(Arc::new(Normalizer::new()))
        .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));

    let tokens = pipeline.transform("The QUICK brown fox, naïvely!").unwrap();
    assert_eq!(tokens, vec!["the", "quick", "brown", "fox", "naively"]);
}

#[test]
fn pipeline_without_tokenizer_still_yields_tokens() {
    let pipeline = TransformerPipeline::new().add_stage(Arc::new(Normalizer::new()));
    let tokens = pipeline.transform("Alpha BETA gamma").unwrap();
    assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn pipeline_stage_order_is_caller_specified() {
    // Normalizer first lowercases, then the cleaner sees lowercase text.
    // Either order must be deterministic and produce tokens.
    let normalize_then_clean = TransformerPipeline::new()
        .add_stage(Arc::new(Normalizer::new()))
        .add_stage(Arc::new(Cleaner::new().unwrap()))
        .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));
    let clean_then_normalize = TransformerPipeline::new()
        .add_stage(Arc::new(Cleaner::new().unwrap()))
        .add_stage(Arc::new(Normalizer::new()))
        .with_tokenizer(Arc::new(WhitespaceTokenizer::new()));

    let text = "Some TEXT, with Punctuation!";
    assert_eq!(
        normalize_then_clean.transform(text).unwrap(),
        clean_then_normalize.transform(text).unwrap()
    );
}

#[test]
fn document_tokenization_is_lazy_and_idempotent() {
    let pipeline = Arc::new(
        TransformerPipeline::new()
            .add_stage(Arc::new(Normalizer::new()))
            .with_tokenizer(Arc::new(WhitespaceTokenizer::new())),
    );
    let doc = TextDocument::new("Same INPUT every time").with_pipeline(pipeline);

    assert!(!doc.tokens_cached());
    let first: Vec<String> = doc.tokens().unwrap().to_vec();
    assert!(doc.tokens_cached());
    let second: Vec<String> = doc.tokens().unwrap().to_vec();
    assert_eq!(first, second);
    assert_eq!(first, vec!["same", "input", "every", "time"]);
}

#[test]
fn document_tokens_are_value_consistent_across_threads() {
    let pipeline = Arc::new(
        TransformerPipeline::new()
            .add_stage(Arc::new(Normalizer::new()))
            .with_tokenizer(Arc::new(WhitespaceTokenizer::new())),
    );
    let doc = Arc::new(TextDocument::new("Racing FIRST access").with_pipeline(pipeline));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = Arc::clone(&doc);
            std::thread::spawn(move || doc.tokens().unwrap().to_vec())
        })
        .collect();

    let mut results: Vec<Vec<String>> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    results.dedup();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0], vec!["racing", "first", "access"]);
}
