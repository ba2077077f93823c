//! Text preprocessing for the Huli search index.
//!
//! Everything between raw corpus lines and tree keys lives here: word
//! extraction and the optional Porter stemming normalization. The tree core
//! never sees un-tokenized text.

pub mod stemmer;
pub mod tokenizer;

pub use stemmer::Stemmer;
pub use tokenizer::Tokenizer;
