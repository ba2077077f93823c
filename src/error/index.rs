//! Index error module.
//!
//! Error types for corpus loading and line-index construction.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::lehua_tst::LehuaTstError;

/// Errors that can occur while loading a corpus or building the index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Error when the corpus file cannot be read.
    #[error("failed to read corpus {path}: {source}")]
    CorpusRead {
        /// The path that failed to load
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error from the underlying tree during index construction.
    #[error(transparent)]
    Tree(#[from] LehuaTstError),
}
