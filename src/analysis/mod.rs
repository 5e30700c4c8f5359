//! Text analysis: tokens and tokenizers.
//!
//! The analysis layer turns a raw input line into the ordered token sequence
//! the synonym swapper consumes. There is exactly one pipeline stage here,
//! whitespace splitting; the swapper never re-tokenizes.

pub mod token;
pub mod tokenizer;

pub use token::{IntoTokenStream, Token, TokenStream};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
