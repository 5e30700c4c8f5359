//! The synonym swapper, the single operation of this crate.
//!
//! [`SynonymSwapper::swap`] walks a token sequence and, for each token
//! independently, rolls a 1-in-N chance of replacing it with a synonym drawn
//! from the lexicon. Three uniform draws decide the outcome: swap-or-not,
//! which sense, which candidate lemma. Any miss along the way (no senses, an
//! empty sense) keeps the original token.
//!
//! # Examples
//!
//! ```
//! use synswap::lexicon::SenseDictionary;
//! use synswap::swapper::SynonymSwapper;
//! use synswap::analysis::token::Token;
//! use std::sync::Arc;
//!
//! let lexicon = Arc::new(SenseDictionary::empty());
//! let mut swapper = SynonymSwapper::new(lexicon);
//! let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];
//!
//! // No senses anywhere, so the text always survives unchanged.
//! assert_eq!(swapper.swap(&tokens, 1).unwrap(), "hello world");
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::token::Token;
use crate::error::{Result, SynswapError};
use crate::lexicon::Lexicon;
use crate::random::{RandomSource, ThreadRandom};

/// Swaps words for synonyms of a randomly selected sense.
pub struct SynonymSwapper {
    lexicon: Arc<dyn Lexicon>,
    random: Box<dyn RandomSource>,
}

impl SynonymSwapper {
    /// Create a swapper over the given lexicon, using thread-local randomness.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self::with_random(lexicon, Box::new(ThreadRandom::new()))
    }

    /// Create a swapper with an explicit random source.
    pub fn with_random(lexicon: Arc<dyn Lexicon>, random: Box<dyn RandomSource>) -> Self {
        SynonymSwapper { lexicon, random }
    }

    /// Transform `tokens` by giving each a 1-in-`swap_rate` chance of being
    /// replaced with a synonym, and join the results with single spaces.
    ///
    /// Output token count and order always match the input; a token with no
    /// usable synonym is passed through unchanged. An empty input yields an
    /// empty string. `swap_rate` must be positive.
    pub fn swap(&mut self, tokens: &[Token], swap_rate: u32) -> Result<String> {
        if swap_rate == 0 {
            return Err(SynswapError::invalid_argument(
                "swap rate must be a positive integer",
            ));
        }

        let mut swapped = 0usize;
        let mut output = Vec::with_capacity(tokens.len());

        for token in tokens {
            if self.random.next_below(swap_rate) != 0 {
                output.push(token.text.clone());
                continue;
            }

            match self.pick_synonym(&token.text) {
                Some(replacement) => {
                    swapped += 1;
                    output.push(replacement);
                }
                None => output.push(token.text.clone()),
            }
        }

        debug!("swapped {} of {} tokens", swapped, tokens.len());

        Ok(output.join(" "))
    }

    /// Draw one synonym for `word`: a uniform sense, then a uniform candidate.
    /// Returns `None` when the lexicon has nothing usable for this word.
    fn pick_synonym(&mut self, word: &str) -> Option<String> {
        let senses = self.lexicon.senses_for(word);
        if senses.is_empty() {
            return None;
        }

        let sense = &senses[self.random.next_below(senses.len() as u32) as usize];
        let candidates = sense.candidates();
        if candidates.is_empty() {
            return None;
        }

        let candidate = &candidates[self.random.next_below(candidates.len() as u32) as usize];
        Some(candidate.clone())
    }
}
