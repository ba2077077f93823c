//! Lehua Ternary Search Tree implementation.
//!
//! This module provides a character-indexed associative container mapping
//! string keys to values, with exact lookup, prefix enumeration,
//! single-character-wildcard matching, and bounded substitution-distance
//! ("near") search. It backs the full-text line index, where words are keys
//! and corpus line numbers are values.
//!
//! The tree is deliberately single-threaded: it is bulk-loaded once and then
//! treated as read-mostly. Callers that need shared access publish an
//! immutable reference after the build; no internal synchronization exists.

mod error;
mod multi;
mod node;

#[cfg(test)]
mod tests;

pub use error::LehuaTstError;
pub use multi::LehuaMultiTst;
use node::{Node, NodeId};

/// Result type for Lehua TST operations
pub type LehuaTstResult<T> = Result<T, LehuaTstError>;

/// Configuration options for the Lehua Ternary Search Tree
#[derive(Debug, Clone)]
pub struct LehuaTstConfig {
    /// Pattern character that matches any single key character in
    /// [`LehuaTst::wildcard_match`]
    pub wildcard: char,
}

impl Default for LehuaTstConfig {
    fn default() -> Self {
        Self { wildcard: '.' }
    }
}

/// Lehua TST is a ternary search tree mapping non-empty string keys to a
/// single value each.
///
/// Key features:
/// * Three-way branching per character, so sibling keys share path prefixes
/// * Lexicographic (code-point order) key enumeration for free
/// * Prefix, single-character-wildcard, and Hamming-bounded queries
/// * Arena node storage: children are indices, never owning pointers
///
/// Keys are compared by raw `char` ordering; any case folding is the
/// caller's responsibility. The tree shape depends only on the sequence of
/// distinct keys first inserted, and nodes are never removed.
#[derive(Debug)]
pub struct LehuaTst<V> {
    /// Arena holding every node of the tree
    nodes: Vec<Node<V>>,

    /// The root node, absent for an empty tree
    root: Option<NodeId>,

    /// Number of distinct keys inserted
    len: usize,

    /// Configuration options
    config: LehuaTstConfig,
}

impl<V> LehuaTst<V> {
    /// Creates a new empty `LehuaTst` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LehuaTstConfig::default())
    }

    /// Creates a new empty `LehuaTst` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: LehuaTstConfig) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            len: 0,
            config,
        }
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// Re-inserting an existing key overwrites its value without changing
    /// the tree shape or the distinct-key count.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert. Must be non-empty.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if a new key was inserted, `Ok(false)` if an existing
    ///   key was updated.
    /// * `Err(LehuaTstError::EmptyKey)` if the key is empty; the tree is
    ///   left unchanged.
    pub fn insert<K: AsRef<str>>(&mut self, key: K, value: V) -> LehuaTstResult<bool> {
        let chars: Vec<char> = key.as_ref().chars().collect();
        if chars.is_empty() {
            return Err(LehuaTstError::EmptyKey);
        }

        let mut cur = match self.root {
            Some(id) => id,
            None => {
                let id = self.alloc(chars[0]);
                self.root = Some(id);
                id
            }
        };
        let mut d = 0;

        loop {
            let c = chars[d];
            let split = self.nodes[cur.index()].split_char;
            if c < split {
                cur = match self.nodes[cur.index()].left {
                    Some(next) => next,
                    None => {
                        let id = self.alloc(c);
                        self.nodes[cur.index()].left = Some(id);
                        id
                    }
                };
            } else if c > split {
                cur = match self.nodes[cur.index()].right {
                    Some(next) => next,
                    None => {
                        let id = self.alloc(c);
                        self.nodes[cur.index()].right = Some(id);
                        id
                    }
                };
            } else if d + 1 < chars.len() {
                d += 1;
                let next_char = chars[d];
                cur = match self.nodes[cur.index()].mid {
                    Some(next) => next,
                    None => {
                        let id = self.alloc(next_char);
                        self.nodes[cur.index()].mid = Some(id);
                        id
                    }
                };
            } else {
                let node = &mut self.nodes[cur.index()];
                let is_new = node.payload.is_none();
                node.payload = Some(value);
                if is_new {
                    self.len += 1;
                }
                return Ok(is_new);
            }
        }
    }

    /// Retrieves the value associated with a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    ///
    /// # Returns
    ///
    /// The value for the key, or `None` if the key is absent. An empty key
    /// resolves to `None` rather than an error.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        let chars: Vec<char> = key.as_ref().chars().collect();
        let id = self.locate(&chars)?;
        self.node(id).payload.as_ref()
    }

    /// Retrieves a mutable reference to the value associated with a key.
    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        let chars: Vec<char> = key.as_ref().chars().collect();
        let id = self.locate(&chars)?;
        self.nodes[id.index()].payload.as_mut()
    }

    /// Checks if a key exists in the tree.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of distinct keys in the tree in O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns all keys in the tree in lexicographic (code point) order.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        self.collect_keys(self.root, &mut prefix, &mut out);
        out
    }

    /// Returns the longest prefix of `s` that is itself a stored key.
    ///
    /// Returns the empty string when no stored key prefixes `s`.
    pub fn longest_prefix_of<'a>(&self, s: &'a str) -> &'a str {
        let mut end = 0;
        let mut x = self.root;
        let mut iter = s.char_indices();
        let mut current = iter.next();
        while let (Some(id), Some((idx, c))) = (x, current) {
            let node = self.node(id);
            if c < node.split_char {
                x = node.left;
            } else if c > node.split_char {
                x = node.right;
            } else {
                if node.payload.is_some() {
                    end = idx + c.len_utf8();
                }
                x = node.mid;
                current = iter.next();
            }
        }
        &s[..end]
    }

    /// Returns all keys starting with the given prefix, in lexicographic
    /// order. The prefix itself is included when it is a stored key.
    ///
    /// An absent prefix path yields an empty vec. The empty prefix
    /// enumerates every key, like [`LehuaTst::keys`].
    pub fn prefix_match<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return self.keys();
        }
        let chars: Vec<char> = prefix.chars().collect();
        let Some(id) = self.locate(&chars) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let node = self.node(id);
        if node.payload.is_some() {
            out.push(prefix.to_string());
        }
        let mut buf = prefix.to_string();
        self.collect_keys(node.mid, &mut buf, &mut out);
        out
    }

    /// Returns the values of all keys starting with the given prefix, in
    /// key order.
    pub fn search<P: AsRef<str>>(&self, prefix: P) -> Vec<&V> {
        let prefix = prefix.as_ref();
        let mut out = Vec::new();
        if prefix.is_empty() {
            self.collect_values(self.root, &mut out);
            return out;
        }
        let chars: Vec<char> = prefix.chars().collect();
        let Some(id) = self.locate(&chars) else {
            return out;
        };

        let node = self.node(id);
        if let Some(v) = &node.payload {
            out.push(v);
        }
        self.collect_values(node.mid, &mut out);
        out
    }

    /// Returns all keys matching the given wildcard pattern.
    ///
    /// The configured wildcard character (`.` by default) matches any single
    /// key character; every other pattern character must match exactly.
    /// Every returned key therefore has exactly the pattern's length. There
    /// are no variable-length wildcards, and the empty pattern matches
    /// nothing since zero-length keys cannot exist.
    pub fn wildcard_match<P: AsRef<str>>(&self, pattern: P) -> Vec<String> {
        let pat: Vec<char> = pattern.as_ref().chars().collect();
        let mut out = Vec::new();
        if pat.is_empty() {
            return out;
        }
        let mut prefix = String::new();
        self.collect_wildcard(self.root, &mut prefix, 0, &pat, &mut out);
        out
    }

    /// Returns the values of all keys within `max_distance` substitutions of
    /// `query`.
    ///
    /// Distance is Hamming-style over a left-to-right character walk: one
    /// unit per position where the key differs from the query, no
    /// insertions or deletions, so only keys of exactly the query's length
    /// can match. A zero `max_distance` or an empty query yields an empty
    /// vec without error.
    pub fn near_search<Q: AsRef<str>>(&self, query: Q, max_distance: usize) -> Vec<&V> {
        let query: Vec<char> = query.as_ref().chars().collect();
        let mut out = Vec::new();
        if query.is_empty() || max_distance == 0 {
            return out;
        }
        self.collect_near(self.root, &query, 0, max_distance, &mut out);
        out
    }

    /// Allocates a fresh node branching on `c` and returns its id.
    fn alloc(&mut self, c: char) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(c));
        id
    }

    fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }

    /// Walks the three-way comparison path for `key` without creating
    /// nodes, returning the node where the key's last character matched.
    ///
    /// The returned node need not carry a payload; prefix queries use it as
    /// the subtree root for collection.
    fn locate(&self, key: &[char]) -> Option<NodeId> {
        if key.is_empty() {
            return None;
        }
        let mut cur = self.root?;
        let mut d = 0;
        loop {
            let node = self.node(cur);
            let c = key[d];
            if c < node.split_char {
                cur = node.left?;
            } else if c > node.split_char {
                cur = node.right?;
            } else if d + 1 < key.len() {
                d += 1;
                cur = node.mid?;
            } else {
                return Some(cur);
            }
        }
    }

    /// Collects every key in the subtree at `id`, in left/self/mid/right
    /// order. `prefix` holds the characters consumed on `mid` transitions so
    /// far; left/right descents do not extend it.
    fn collect_keys(&self, id: Option<NodeId>, prefix: &mut String, out: &mut Vec<String>) {
        let Some(id) = id else { return };
        let node = self.node(id);
        self.collect_keys(node.left, prefix, out);
        if node.payload.is_some() {
            let mut key = prefix.clone();
            key.push(node.split_char);
            out.push(key);
        }
        prefix.push(node.split_char);
        self.collect_keys(node.mid, prefix, out);
        prefix.pop();
        self.collect_keys(node.right, prefix, out);
    }

    /// Collects every payload in the subtree at `id`, in key order.
    fn collect_values<'a>(&'a self, id: Option<NodeId>, out: &mut Vec<&'a V>) {
        let Some(id) = id else { return };
        let node = self.node(id);
        self.collect_values(node.left, out);
        if let Some(v) = &node.payload {
            out.push(v);
        }
        self.collect_values(node.mid, out);
        self.collect_values(node.right, out);
    }

    /// Wildcard collection: a wildcard pattern character branches into all
    /// three children, a literal only along the comparison path. A payload
    /// node matches only when the last pattern character is consumed at it,
    /// which pins matched keys to the pattern's exact length.
    fn collect_wildcard(
        &self,
        id: Option<NodeId>,
        prefix: &mut String,
        i: usize,
        pat: &[char],
        out: &mut Vec<String>,
    ) {
        let Some(id) = id else { return };
        let node = self.node(id);
        let c = pat[i];
        let wild = c == self.config.wildcard;

        if wild || c < node.split_char {
            self.collect_wildcard(node.left, prefix, i, pat, out);
        }
        if wild || c == node.split_char {
            if i + 1 == pat.len() && node.payload.is_some() {
                let mut key = prefix.clone();
                key.push(node.split_char);
                out.push(key);
            }
            if i + 1 < pat.len() {
                prefix.push(node.split_char);
                self.collect_wildcard(node.mid, prefix, i + 1, pat, out);
                prefix.pop();
            }
        }
        if wild || c > node.split_char {
            self.collect_wildcard(node.right, prefix, i, pat, out);
        }
    }

    /// Pruned near-search collection.
    ///
    /// Left/right are explored unconditionally while budget remains, and
    /// only along the ordinary comparison direction once it is exhausted. A
    /// `mid` transition consumes one query character, costing one budget
    /// unit on mismatch; `checked_sub` makes an overdrawn budget
    /// unrepresentable, so a payload node emits exactly when the final query
    /// character lands on it with the mismatch count still within budget.
    fn collect_near<'a>(
        &'a self,
        id: Option<NodeId>,
        query: &[char],
        i: usize,
        budget: usize,
        out: &mut Vec<&'a V>,
    ) {
        let Some(id) = id else { return };
        let node = self.node(id);
        let c = query[i];

        if budget > 0 || c < node.split_char {
            self.collect_near(node.left, query, i, budget, out);
        }
        let remaining = if c == node.split_char {
            Some(budget)
        } else {
            budget.checked_sub(1)
        };
        if let Some(remaining) = remaining {
            if i + 1 == query.len() {
                if let Some(v) = &node.payload {
                    out.push(v);
                }
            } else {
                self.collect_near(node.mid, query, i + 1, remaining, out);
            }
        }
        if budget > 0 || c > node.split_char {
            self.collect_near(node.right, query, i, budget, out);
        }
    }
}

impl<V> Default for LehuaTst<V> {
    fn default() -> Self {
        Self::new()
    }
}
