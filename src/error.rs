//! Error types for the synswap library.
//!
//! All fallible operations return [`Result`], an alias over [`SynswapError`].
//! Per-token lookup misses are never errors; they are absorbed by the
//! keep-the-original-word fallback in the swapper. Only argument validation,
//! lexicon loading, and file I/O surface here.
//!
//! # Examples
//!
//! ```
//! use synswap::error::{SynswapError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SynswapError::invalid_argument("swap rate must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for synswap operations.
#[derive(Error, Debug)]
pub enum SynswapError {
    /// I/O errors (reading input files, lexicon files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (loading, building the dictionary)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument supplied by a caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SynswapError.
pub type Result<T> = std::result::Result<T, SynswapError>;

impl SynswapError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        SynswapError::Lexicon(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SynswapError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SynswapError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SynswapError::Other(msg.into())
    }
}
