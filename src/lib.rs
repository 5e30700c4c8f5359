//! # synswap
//!
//! A small text-mangling library that swaps words for synonyms drawn from a
//! lexical dictionary. Each word of the input independently gets a 1-in-N
//! chance of being replaced by a candidate lemma of one of its senses; words
//! the lexicon does not know are passed through unchanged.
//!
//! ## Features
//!
//! - Whitespace tokenization with byte offsets
//! - Pluggable lexical lookup behind the `Lexicon` trait
//! - FST-backed sense dictionary, loadable from JSON
//! - Injectable randomness for deterministic tests

pub mod analysis;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod random;
pub mod swapper;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
