//! Injectable randomness for the swapper.
//!
//! The process-wide random generator is the only global state in the system,
//! so it sits behind [`RandomSource`]. Production code uses [`ThreadRandom`];
//! tests inject [`SequenceRandom`] to script every draw.

use rand::Rng;

/// A source of uniform random integers below a bound.
pub trait RandomSource: Send {
    /// Return a uniform random integer in `[0, bound)`. `bound` must be >= 1.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Randomness from the thread-local generator.
#[derive(Clone, Debug, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Create a new thread-local random source.
    pub fn new() -> Self {
        ThreadRandom
    }
}

impl RandomSource for ThreadRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        rand::rng().random_range(0..bound)
    }
}

/// A random source that replays a fixed sequence of values.
///
/// Each draw takes the next value in the sequence modulo the bound, cycling
/// back to the start when the sequence is exhausted. Deterministic by
/// construction; useful for tests and reproducible demos.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source that cycles through `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "SequenceRandom needs at least one value");
        SequenceRandom { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&mut self, bound: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}
