//! Line-oriented corpus storage.
//!
//! The index stores line numbers, not text; the corpus keeps the actual
//! lines so query results can be rendered back to the original text.

use std::fs;
use std::path::Path;

use crate::error::index::IndexError;

/// An in-memory collection of corpus lines, addressed by line number.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Loads a corpus from a text file, one line per entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the corpus file.
    ///
    /// # Returns
    ///
    /// * `Ok(Corpus)` with the file's lines in order.
    /// * `Err(IndexError::CorpusRead)` if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| IndexError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    /// Builds a corpus from already-loaded text.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    /// Returns the line at `index`, or `None` past the end.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterates over all lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the corpus has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_text() {
        let corpus = Corpus::from_text("first line\nsecond line\n");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.line(0), Some("first line"));
        assert_eq!(corpus.line(1), Some("second line"));
        assert_eq!(corpus.line(2), None);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file, "beta").unwrap();
        let corpus = Corpus::from_path(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.line(1), Some("beta"));
    }

    #[test]
    fn test_missing_file_errors() {
        let err = Corpus::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_text("");
        assert!(corpus.is_empty());
        assert_eq!(corpus.lines().count(), 0);
    }
}
