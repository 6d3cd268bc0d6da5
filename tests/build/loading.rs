//! Loading from disk and load-time failures.

use folio::{LoadError, Searcher, SearcherConfig};
use std::io::Write;

#[test]
fn test_load_file_round_trips_sample() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(folio::testing::sample_corpus().as_bytes()).unwrap();

    let searcher = Searcher::load_file(file.path(), SearcherConfig::default()).unwrap();
    assert_eq!(searcher.document_count(), folio::testing::SAMPLE_DOCUMENTS);
    assert_eq!(searcher.text(), folio::testing::sample_corpus());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = Searcher::load_file(&path, SearcherConfig::default()).unwrap_err();
    match err {
        LoadError::Io { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"From fairest \xc3\x28 creatures\n").unwrap();
    let err = Searcher::load_file(file.path(), SearcherConfig::default()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidUtf8 { offset: 13 }));
}

#[test]
fn test_nul_bytes_are_ordinary_text() {
    let searcher = Searcher::load(b"a\0b c\n\nd \n".to_vec(), SearcherConfig::default()).unwrap();
    assert_eq!(searcher.document_count(), 2);
    assert_eq!(searcher.search_literal("\0b").len(), 1);
    assert_eq!(searcher.term_frequency("ab", 0), 1);
}

#[test]
fn test_config_from_json() {
    let config: SearcherConfig = serde_json::from_str(r#"{"ngramOrder": 2}"#).unwrap();
    let searcher = Searcher::load(b"a b c \n".to_vec(), config).unwrap();
    assert_eq!(searcher.config().ngram_order, 2);
    assert_eq!(searcher.term_frequency("a b", 0), 1);
    assert_eq!(searcher.term_frequency("a b c", 0), 0);
}

#[test]
fn test_zero_order_rejected_before_reading() {
    let err = Searcher::load(b"text\n".to_vec(), SearcherConfig::with_ngram_order(0)).unwrap_err();
    assert!(matches!(err, LoadError::InvalidConfig(_)));
}
