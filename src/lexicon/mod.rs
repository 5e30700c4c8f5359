//! Lexical lookup: word senses and the sources that provide them.
//!
//! The swapper only needs one capability from a lexical knowledge base:
//! given a word, return its senses, where each [`Sense`] carries an ordered
//! list of candidate synonym lemmas. The [`Lexicon`] trait models that
//! surface so any backing store (a JSON file, an embedded dictionary, a
//! remote service) can be substituted without touching the swapper.

use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::SenseDictionary;

/// One meaning of a word, carrying its candidate synonym lemmas.
///
/// A sense with zero candidates should not occur in well-formed data; the
/// swapper treats one the same as a word with no senses at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    lemmas: Vec<String>,
}

impl Sense {
    /// Create a sense from its candidate lemmas.
    pub fn new(lemmas: Vec<String>) -> Self {
        Sense { lemmas }
    }

    /// The ordered candidate synonym lemmas of this sense.
    pub fn candidates(&self) -> &[String] {
        &self.lemmas
    }

    /// Number of candidate lemmas.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// Check whether this sense has no candidates.
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

/// Trait for lexical knowledge bases that map words to their senses.
///
/// Implementations must absorb their own lookup failures: an unknown word or
/// a backend miss is an empty result, never an error. That keeps the
/// fallback-to-original-word policy local to the swapper.
pub trait Lexicon: Send + Sync {
    /// Return all senses of `word`, in the source's order. May be empty.
    fn senses_for(&self, word: &str) -> Vec<Sense>;

    /// Get the name of this lexicon (for debugging and configuration).
    fn name(&self) -> &'static str;
}
