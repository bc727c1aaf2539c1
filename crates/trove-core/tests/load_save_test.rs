use std::fs;
use tempfile::TempDir;
use trove_core::{StoreConfig, TripleStore, TroveError};

const SAMPLE: &str = "\
<x> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <C> .
<C> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <D> .
<x> <knows> <y> .
<x> <knows> <y> .
";

#[test]
fn test_load_then_save_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.nt");
    let output = dir.path().join("output.nt");
    fs::write(&input, SAMPLE).unwrap();

    let store = TripleStore::load(&input).unwrap();
    assert_eq!(store.statement_count(), 4);
    assert_eq!(store.stats().edges, 3);
    assert_eq!(store.classes_of("<x>"), vec!["<C>", "<D>"]);

    store.save(&output).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 4);

    let reloaded = TripleStore::load(&output).unwrap();
    assert_eq!(reloaded.stats(), store.stats());
    assert_eq!(reloaded.sorted_statements(), store.sorted_statements());
}

#[test]
fn test_save_writes_in_load_order() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.nt");
    let store = TripleStore::from_statements([("s", "p", "o"), ("t", "p", "s"), ("s", "p", "o")]);

    store.save(&output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "s p o .\ns p o .\nt p s .\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.nt");

    let err = TripleStore::load(&missing).unwrap_err();
    assert_eq!(err.category(), "io");
    assert!(err.is_recoverable());
    assert_eq!(err.path(), missing.to_str());
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("no-such-dir").join("out.nt");
    let store = TripleStore::from_statements([("a", "p", "b")]);

    let err = store.save(&target).unwrap_err();
    assert!(matches!(err, TroveError::Io { .. }));
}

#[test]
fn test_lenient_load_skips_short_lines() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.nt");
    fs::write(&input, "a p b .\nbroken line\n\nc q d\n").unwrap();

    let store = TripleStore::load(&input).unwrap();
    assert_eq!(store.statement_count(), 2);
    assert_eq!(store.distinct_predicates(), vec!["p", "q"]);
}

#[test]
fn test_strict_load_rejects_short_lines() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.nt");
    fs::write(&input, "a p b .\nbroken line\n").unwrap();

    let mut config = StoreConfig::default();
    config.loading.strict = true;

    let err = TripleStore::load_with_config(&input, &config).unwrap_err();
    match err {
        TroveError::MalformedStatement { line, content, .. } => {
            assert_eq!(line, 2);
            assert_eq!(content.as_deref(), Some("broken line"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
