//! Error types for the Lehua Ternary Search Tree.

/// Errors that can occur in Lehua TST operations.
///
/// Lookups against absent keys are ordinary `None`/empty results, never
/// errors; only insertion can fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LehuaTstError {
    /// Error when an empty key is inserted.
    #[error("keys cannot be empty")]
    EmptyKey,
}
