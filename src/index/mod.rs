//! Full-text line index.
//!
//! Builds a ternary search tree over the distinct words of every corpus
//! line, mapping each word to the line numbers it occurs on. Multi-word
//! queries are answered by intersecting the per-word result sets here, in
//! the index layer; the tree itself only ever answers single-word queries.

pub mod corpus;

use std::collections::HashSet;

use tracing::debug;

pub use corpus::Corpus;

use crate::config::index::IndexConfig;
use crate::data_structures::lehua_tst::{LehuaMultiTst, LehuaTstConfig};
use crate::error::index::IndexError;
use crate::text::{Stemmer, Tokenizer};

/// Word index over a line-oriented corpus.
///
/// Built once from the corpus, then queried read-only. Each distinct word
/// of a line produces one `(word, line_number)` insertion, so a word's
/// value sequence is its list of owning lines in file order, without
/// per-line duplicates.
#[derive(Debug)]
pub struct LineIndex {
    corpus: Corpus,
    tree: LehuaMultiTst<usize>,
    tokenizer: Tokenizer,
    max_near_distance: usize,
}

impl LineIndex {
    /// Builds an index over the given corpus.
    ///
    /// # Arguments
    ///
    /// * `corpus` - The lines to index.
    /// * `config` - Index options: wildcard character and stemming.
    pub fn build(corpus: Corpus, config: &IndexConfig) -> Result<Self, IndexError> {
        let tokenizer = if config.stem {
            Tokenizer::with_stemmer(Stemmer::with_min_length(config.min_stem_length))
        } else {
            Tokenizer::new()
        };
        let mut tree = LehuaMultiTst::with_config(LehuaTstConfig {
            wildcard: config.wildcard,
        });

        for (line_number, line) in corpus.lines().enumerate() {
            for word in tokenizer.words(line) {
                tree.insert(&word, line_number)?;
            }
        }
        debug!(
            lines = corpus.len(),
            words = tree.len(),
            "line index built"
        );

        Ok(Self {
            corpus,
            tree,
            tokenizer,
            max_near_distance: config.max_near_distance,
        })
    }

    /// Returns the indexed corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Returns the number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.tree.len()
    }

    /// Returns the line numbers matching a query.
    ///
    /// The query is tokenized with the same pipeline as the corpus; each
    /// word contributes the lines containing any indexed word it prefixes,
    /// and multiple words intersect. The first word's line order is
    /// preserved. An empty or word-less query matches nothing.
    pub fn search(&self, query: &str) -> Vec<usize> {
        let words = self.tokenizer.words(query);
        if words.is_empty() {
            return Vec::new();
        }

        let mut results: Option<Vec<usize>> = None;
        for word in &words {
            let hits: Vec<usize> = self.tree.search(word).into_iter().copied().collect();
            results = Some(match results {
                None => dedup_preserving_order(hits),
                Some(current) => {
                    let keep: HashSet<usize> = hits.into_iter().collect();
                    current.into_iter().filter(|n| keep.contains(n)).collect()
                }
            });
        }

        let lines = results.unwrap_or_default();
        debug!(query, matches = lines.len(), "search complete");
        lines
    }

    /// Returns the text of every line matching a query.
    pub fn search_lines(&self, query: &str) -> Vec<&str> {
        self.search(query)
            .into_iter()
            .filter_map(|n| self.corpus.line(n))
            .collect()
    }

    /// Returns the indexed words starting with `prefix`, lexicographic.
    pub fn prefix_match(&self, prefix: &str) -> Vec<String> {
        self.tree.prefix_match(prefix)
    }

    /// Returns the indexed words matching a single-character-wildcard
    /// pattern.
    pub fn wildcard_match(&self, pattern: &str) -> Vec<String> {
        self.tree.wildcard_match(pattern)
    }

    /// Returns the distinct line numbers of every indexed word within
    /// `max_distance` substitutions of `word`. The distance is capped at
    /// the configured `max_near_distance`.
    pub fn near_search(&self, word: &str, max_distance: usize) -> Vec<usize> {
        let hits: Vec<usize> = self
            .tree
            .near_search(word, max_distance.min(self.max_near_distance))
            .into_iter()
            .copied()
            .collect();
        dedup_preserving_order(hits)
    }
}

/// Drops repeated values, keeping the first occurrence of each.
fn dedup_preserving_order(values: Vec<usize>) -> Vec<usize> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}
