//! Huli full-text line index library.
//!
//! This library contains the core components of Huli: a ternary search
//! tree keyed by strings, text normalization (tokenizer and Porter
//! stemmer), and a line index that answers multi-word queries over a
//! corpus. The library is designed to be used by the binary crate, but
//! can also be used as a dependency by other projects.
//!
//! # Architecture
//!
//! Huli is designed with the following principles in mind:
//! - Strict component boundaries
//! - Explicit error handling and propagation
//! - Deterministic, order-preserving query results
//! - Configuration validated before use

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod index;
pub mod text;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Huli.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::HuliResult<()> {
    // Set up global error reporter with tracing
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
