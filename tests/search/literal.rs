//! Literal occurrence search.

use super::common::{load, SAMPLE};
use folio::search::literal::CONTEXT_BYTES;

#[test]
fn test_every_occurrence_found() {
    let text = SAMPLE.text();
    let hits = SAMPLE.search_literal("the");
    let expected: Vec<usize> = text.match_indices("the").map(|(i, _)| i).collect();
    let offsets: Vec<usize> = hits.iter().map(|h| h.offset).collect();
    assert_eq!(offsets, expected);
}

#[test]
fn test_case_sensitive() {
    assert!(SAMPLE.search_literal("castle").is_empty());
    assert_eq!(SAMPLE.search_literal("Castle").len(), 3);
}

#[test]
fn test_context_surrounds_the_match() {
    for hit in SAMPLE.search_literal("Elsinore") {
        assert!(hit.context.contains("Elsinore"));
        assert!(hit.context.len() <= 2 * CONTEXT_BYTES + "Elsinore".len() + 6);
    }
}

#[test]
fn test_overlapping_occurrences() {
    let searcher = load("aaaa\n");
    let offsets: Vec<usize> = searcher.search_literal("aa").iter().map(|h| h.offset).collect();
    assert_eq!(offsets, vec![0, 1, 2]);
}

#[test]
fn test_multibyte_query() {
    let hits = SAMPLE.search_literal("’tis");
    assert_eq!(hits.len(), 1);
    assert!(hits[0].context.contains("Whether ’tis nobler"));
}
