// tests/store_tests.rs

use std::fs;
use std::io::{self, BufReader, Read};
use std::path::Path;

use sqlfile::{ParseError, Parser, QueryStore};

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/basic.sql")
}

// ============================================================================
// File Construction
// ============================================================================

#[test]
fn test_from_path_reads_fixture() {
    let store = QueryStore::from_path(fixture_path()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get("myNamedQuery"), Some("SELECT A FROM B"));
    assert_eq!(store.get("anotherQuery"), Some("SELECT C\nFROM D"));
}

#[test]
fn test_from_path_matches_parsing_the_same_bytes() {
    let from_path = QueryStore::from_path(fixture_path()).unwrap();

    let bytes = fs::read(fixture_path()).unwrap();
    let from_reader = Parser::new().parse(bytes.as_slice()).unwrap();

    assert_eq!(from_path, from_reader);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let result = QueryStore::from_path("no/such/file.sql");
    assert!(matches!(result, Err(ParseError::Io(_))));
}

// ============================================================================
// Read Failures
// ============================================================================

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream interrupted"))
    }
}

#[test]
fn test_reader_failure_yields_no_store() {
    let result = Parser::new().parse(BufReader::new(FailingReader));
    match result {
        Err(ParseError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        Ok(_) => panic!("expected Io error"),
    }
}

#[test]
fn test_invalid_utf8_yields_io_error() {
    let bytes: &[u8] = b"-- #q\nSELECT \xff\xfe FROM t\n";
    let result = Parser::new().parse(bytes);
    assert!(matches!(result, Err(ParseError::Io(_))));
}

#[test]
fn test_parse_error_display_names_the_cause() {
    let err = Parser::new().parse(BufReader::new(FailingReader)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("could not be read"));
    assert!(message.contains("stream interrupted"));
}

// ============================================================================
// Store Accessors
// ============================================================================

#[test]
fn test_names_and_len_agree() {
    let store = QueryStore::from_path(fixture_path()).unwrap();
    assert_eq!(store.names().len(), store.len());
    assert!(!store.is_empty());
}

#[test]
fn test_get_on_unregistered_name_is_none() {
    let store = QueryStore::from_path(fixture_path()).unwrap();
    assert_eq!(store.get("invalidQuery"), None);
}

#[test]
fn test_iter_covers_every_registered_query() {
    let store = QueryStore::from_path(fixture_path()).unwrap();

    let mut seen: Vec<(&str, &str)> = store.iter().collect();
    seen.sort_unstable();

    assert_eq!(
        seen,
        vec![
            ("anotherQuery", "SELECT C\nFROM D"),
            ("myNamedQuery", "SELECT A FROM B"),
        ]
    );
}

#[test]
fn test_cloned_store_is_equal() {
    let store = QueryStore::from_path(fixture_path()).unwrap();
    let copy = store.clone();
    assert_eq!(store, copy);
    assert_eq!(copy.get("myNamedQuery"), Some("SELECT A FROM B"));
}
