//! TF, DF, n-gram and document-length tables.

use super::common::{load_with_order, paragraphs, SAMPLE};

#[test]
fn test_counts_on_sample() {
    // Sonnet 2 is the ninth document.
    assert_eq!(SAMPLE.term_frequency("thy", 8), 2);
    assert_eq!(SAMPLE.document_frequency("thy"), 1);
    assert_eq!(SAMPLE.document_frequency("castle"), 3);
    assert_eq!(SAMPLE.term_frequency("beautys", 6), 1);
    assert_eq!(SAMPLE.document_frequency("beauty"), 0);
}

#[test]
fn test_document_lengths_count_unigrams() {
    let searcher = load_with_order(&paragraphs(&["one two three", "four, -- five", "six"]), 3);
    assert_eq!(searcher.document_length(0), 3);
    // "--" normalizes to nothing and is not counted
    assert_eq!(searcher.document_length(1), 2);
    assert_eq!(searcher.document_length(2), 1);
    let total: usize = (0..3).map(|d| searcher.document_length(d)).sum();
    assert_eq!(total, searcher.stats().tokens);
}

#[test]
fn test_ngrams_skip_dropped_tokens() {
    let searcher = load_with_order("four, -- five six\n", 3);
    assert_eq!(searcher.term_frequency("four five", 0), 1);
    assert_eq!(searcher.term_frequency("four five six", 0), 1);
}

#[test]
fn test_ngram_crosses_document_boundary() {
    let searcher = load_with_order(&paragraphs(&["alpha beta", "gamma delta"]), 3);
    assert_eq!(searcher.term_frequency("beta gamma", 0), 1);
    assert_eq!(searcher.term_frequency("alpha beta gamma", 0), 1);
    assert_eq!(searcher.term_frequency("beta gamma delta", 0), 1);
    assert_eq!(searcher.term_frequency("beta gamma", 1), 0);
    // DF never sees n-grams
    assert_eq!(searcher.document_frequency("beta gamma"), 0);
}

#[test]
fn test_last_token_needs_trailing_whitespace() {
    let searcher = load_with_order("fair youth", 2);
    assert_eq!(searcher.term_frequency("fair", 0), 1);
    assert_eq!(searcher.term_frequency("youth", 0), 0);
}

#[test]
fn test_stats_reflect_tables() {
    let stats = SAMPLE.stats();
    assert_eq!(stats.ngram_order, 5);
    assert_eq!(stats.fingerprint, SAMPLE.fingerprint());
    assert!(stats.tf_entries > stats.vocabulary);
    assert_eq!(stats.acts, 3);
    assert_eq!(stats.scenes, 2);
}
