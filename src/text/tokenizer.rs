//! Word extraction for indexing and querying.
//!
//! Both sides of the index go through the same tokenizer: corpus lines at
//! build time and query strings at search time, so a query word always
//! normalizes to the same key the index stored.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::stemmer::Stemmer;

/// Word characters plus apostrophes, so contractions stay single words.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w']+").expect("word pattern is a valid regex")
});

/// Splits text into lower-cased words, de-duplicated per call.
///
/// De-duplication preserves first-seen order, which keeps indexing
/// deterministic: one `(word, line)` insertion event per distinct word per
/// line. An optional Porter stemmer normalizes words before de-duplication.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stemmer: Option<Stemmer>,
}

impl Tokenizer {
    /// Creates a tokenizer without stemming.
    pub fn new() -> Self {
        Self { stemmer: None }
    }

    /// Creates a tokenizer that stems every extracted word.
    pub fn with_stemmer(stemmer: Stemmer) -> Self {
        Self {
            stemmer: Some(stemmer),
        }
    }

    /// Extracts the distinct words of `text`, lower-cased, in first-seen
    /// order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for m in WORD_PATTERN.find_iter(&text) {
            let word = match &self.stemmer {
                Some(stemmer) => stemmer.stem(m.as_str()),
                None => m.as_str().to_string(),
            };
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_lower_cased_in_order() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.words("The Abbot of the Abbey"),
            vec!["the", "abbot", "of", "abbey"]
        );
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokenizer = Tokenizer::new();
        assert_eq!(
            tokenizer.words("stop, look -- listen!"),
            vec!["stop", "look", "listen"]
        );
    }

    #[test]
    fn test_apostrophes_kept() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.words("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_empty_and_wordless_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.words("").is_empty());
        assert!(tokenizer.words("--- ... !!!").is_empty());
    }

    #[test]
    fn test_stemming_applies_before_dedup() {
        let tokenizer = Tokenizer::with_stemmer(Stemmer::new());
        // "cats" and "cat" collapse to the same key
        assert_eq!(tokenizer.words("cats and a cat"), vec!["cat", "and", "a"]);
    }
}
