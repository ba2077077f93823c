//! Data structures for the Huli search index.
//!
//! This module contains the search structures backing the line index. The
//! implementations are deliberately single-threaded and allocation-light:
//! the index is bulk-loaded once and then only read, so every structure here
//! favors arena storage and index-based links over shared-ownership
//! pointers.

pub mod lehua_tst;

// Re-export common data structures
pub use lehua_tst::{LehuaMultiTst, LehuaTst, LehuaTstConfig, LehuaTstError, LehuaTstResult};
