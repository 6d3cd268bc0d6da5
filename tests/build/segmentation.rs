//! Corpus segmentation into documents.

use super::common::{assert_gaps_are_line_breaks, assert_partition, load, SAMPLE, SAMPLE_DOCUMENTS};
use folio::Span;

#[test]
fn test_sample_partition() {
    assert_eq!(SAMPLE.document_count(), SAMPLE_DOCUMENTS);
    assert_partition(&SAMPLE);
    assert_gaps_are_line_breaks(&SAMPLE);
}

#[test]
fn test_single_line_breaks_do_not_split() {
    let searcher = load("line one\nline two\r\nline three\n");
    assert_eq!(searcher.document_count(), 1);
    assert_eq!(searcher.documents()[0], Span::new(0, searcher.text().len()));
}

#[test]
fn test_crlf_and_lf_blank_lines_both_split() {
    let searcher = load("first\r\n\r\nsecond\n\nthird\r\n\n\r\nfourth");
    let texts: Vec<&str> = (0..searcher.document_count())
        .filter_map(|i| searcher.document_text(i))
        .collect();
    assert_eq!(texts, vec!["first", "second", "third", "fourth"]);
}

#[test]
fn test_leading_and_trailing_separators() {
    let searcher = load("\n\n\nbody\n\n\n");
    assert_eq!(searcher.document_count(), 1);
    assert_eq!(searcher.documents()[0], Span::new(3, 10));
    assert_partition(&searcher);
}

#[test]
fn test_only_separators() {
    let searcher = load("\r\n\r\n\r\n");
    assert_eq!(searcher.document_count(), 1);
    assert_partition(&searcher);
}

#[test]
fn test_empty_corpus_is_one_empty_document() {
    let searcher = load("");
    assert_eq!(searcher.documents(), &[Span::new(0, 0)]);
}

#[test]
fn test_document_at_assigns_gaps_forward() {
    let searcher = load("aa\n\nbb\n\ncc");
    // Offsets inside a gap belong to the following document.
    assert_eq!(searcher.document_at(0), 0);
    assert_eq!(searcher.document_at(2), 1);
    assert_eq!(searcher.document_at(4), 1);
    assert_eq!(searcher.document_at(8), 2);
    assert_eq!(searcher.document_at(100), 2);
}
