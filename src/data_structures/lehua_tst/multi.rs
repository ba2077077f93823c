//! Multi-value variant of the Lehua Ternary Search Tree.
//!
//! Wraps the single-value tree so each key accumulates an ordered,
//! append-only sequence of values across repeated insertions. Traversal is
//! untouched; only the payload slot changes from one value to a sequence,
//! and value-producing queries flatten each matching node's sequence in
//! insertion order.

use super::{LehuaTst, LehuaTstConfig, LehuaTstResult};

/// Ternary search tree storing an ordered sequence of values per key.
///
/// This is the configuration the line index uses: a word inserted once per
/// containing line ends up mapped to every owning line number, in file
/// order.
#[derive(Debug, Default)]
pub struct LehuaMultiTst<V> {
    tree: LehuaTst<Vec<V>>,
}

impl<V> LehuaMultiTst<V> {
    /// Creates a new empty `LehuaMultiTst` with default configuration.
    pub fn new() -> Self {
        Self {
            tree: LehuaTst::new(),
        }
    }

    /// Creates a new empty `LehuaMultiTst` with the specified configuration.
    pub fn with_config(config: LehuaTstConfig) -> Self {
        Self {
            tree: LehuaTst::with_config(config),
        }
    }

    /// Inserts a key-value pair, appending to the key's value sequence when
    /// the key already exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new key was inserted, `Ok(false)` if the value was
    ///   appended to an existing key.
    /// * `Err(LehuaTstError::EmptyKey)` if the key is empty.
    pub fn insert<K: AsRef<str>>(&mut self, key: K, value: V) -> LehuaTstResult<bool> {
        let key = key.as_ref();
        match self.tree.get_mut(key) {
            Some(values) => {
                values.push(value);
                Ok(false)
            }
            None => self.tree.insert(key, vec![value]),
        }
    }

    /// Returns the key's values in insertion order, or `None` for an absent
    /// key. Index the slice for "the n-th value ever inserted".
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&[V]> {
        self.tree.get(key).map(Vec::as_slice)
    }

    /// Checks if a key exists in the tree.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.tree.contains(key)
    }

    /// Returns the number of distinct keys in O(1), independent of how many
    /// values each key holds.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns all keys in lexicographic order.
    pub fn keys(&self) -> Vec<String> {
        self.tree.keys()
    }

    /// Returns the longest prefix of `s` that is itself a stored key.
    pub fn longest_prefix_of<'a>(&self, s: &'a str) -> &'a str {
        self.tree.longest_prefix_of(s)
    }

    /// Returns all keys starting with the given prefix, in lexicographic
    /// order.
    pub fn prefix_match<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.tree.prefix_match(prefix)
    }

    /// Returns all keys matching the given wildcard pattern.
    pub fn wildcard_match<P: AsRef<str>>(&self, pattern: P) -> Vec<String> {
        self.tree.wildcard_match(pattern)
    }

    /// Returns the values of all keys starting with the given prefix,
    /// flattened across matches: each matching key contributes its whole
    /// sequence in insertion order before the next key.
    pub fn search<P: AsRef<str>>(&self, prefix: P) -> Vec<&V> {
        self.tree.search(prefix).into_iter().flatten().collect()
    }

    /// Returns the values of all keys within `max_distance` substitutions of
    /// `query`, flattened across matches.
    pub fn near_search<Q: AsRef<str>>(&self, query: Q, max_distance: usize) -> Vec<&V> {
        self.tree
            .near_search(query, max_distance)
            .into_iter()
            .flatten()
            .collect()
    }
}
