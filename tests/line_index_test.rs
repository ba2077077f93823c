//! Integration tests for the line index.
//!
//! Exercises the full pipeline: corpus file on disk, index construction,
//! and multi-word queries through the public library API.

use std::io::Write;

use huli_lib::config::index::IndexConfig;
use huli_lib::index::{Corpus, LineIndex};

const CORPUS: &str = "\
It is a truth universally acknowledged
that a single man in possession of a good fortune
must be in want of a wife
However little known the feelings or views of such a man
this truth is so well fixed in the minds of the surrounding families";

fn build_index(config: &IndexConfig) -> LineIndex {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{CORPUS}").unwrap();
    let corpus = Corpus::from_path(file.path()).unwrap();
    LineIndex::build(corpus, config).unwrap()
}

#[test]
fn test_build_from_file() {
    let index = build_index(&IndexConfig::default());
    assert_eq!(index.corpus().len(), 5);
    assert!(index.word_count() > 0);
}

#[test]
fn test_single_word_queries() {
    let index = build_index(&IndexConfig::default());

    assert_eq!(index.search("truth"), vec![0, 4]);
    assert_eq!(index.search("man"), vec![1, 3]);
    assert!(index.search("zebra").is_empty());
}

#[test]
fn test_multi_word_queries_intersect() {
    let index = build_index(&IndexConfig::default());

    // "truth" hits lines 0 and 4, "universally" only line 0
    assert_eq!(index.search("truth universally"), vec![0]);
    assert_eq!(index.search_lines("truth universally"),
        vec!["It is a truth universally acknowledged"]);

    // No line contains both
    assert!(index.search("wife fortune").is_empty());
}

#[test]
fn test_queries_are_case_insensitive() {
    let index = build_index(&IndexConfig::default());

    assert_eq!(index.search("TRUTH"), index.search("truth"));
    assert_eq!(index.search("It"), index.search("it"));
}

#[test]
fn test_prefix_semantics_reach_longer_words() {
    let index = build_index(&IndexConfig::default());

    // "univers" prefixes "universally"
    assert_eq!(index.search("univers"), vec![0]);
    // "fort" prefixes "fortune"
    assert_eq!(index.search("fort"), vec![1]);
}

#[test]
fn test_vocabulary_queries() {
    let index = build_index(&IndexConfig::default());

    let words = index.prefix_match("fee");
    assert_eq!(words, vec!["feelings".to_string()]);

    // Same-length wildcard match
    let words = index.wildcard_match("m.n");
    assert_eq!(words, vec!["man".to_string()]);

    // "man" within one substitution of "min" and itself
    let lines = index.near_search("man", 1);
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn test_stemming_end_to_end() {
    let config = IndexConfig {
        stem: true,
        ..IndexConfig::default()
    };
    let index = build_index(&config);

    // "feelings" stems toward "feel", so the stemmed query reaches line 3
    assert_eq!(index.search("feelings"), vec![3]);
    assert_eq!(index.search("feeling"), vec![3]);
}
