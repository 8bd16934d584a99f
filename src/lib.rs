//! # Word Search
//!
//! Generation and verification of word search puzzles.
//!
//! ## Architecture Overview
//!
//! The crate is split into two independent halves that only share the
//! finished [`Grid`]:
//!
//! - **Placer** ([`generation`]): packs a vocabulary into a rows×cols grid
//!   across, down or diagonally, forcing a designated subset onto diagonals,
//!   then fills the remaining cells with random letters
//! - **Locator** ([`search`]): reports whether a word or its reversal appears
//!   as a straight run in any of the eight directions
//!
//! The locator never looks at placement records, so it can act as an oracle
//! for the placer. The [`trials`] module runs that check over many seeded
//! generations and summarises the results.
//!
//! ```
//! use wordsearch::{contains, generate, Vocabulary};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let vocabulary = Vocabulary::new(&["SWEET", "MINE"], &["SWEET"]).unwrap();
//! let puzzle = generate(&vocabulary, 12, 12, &mut StdRng::seed_from_u64(9)).unwrap();
//! assert!(vocabulary.words().iter().all(|w| contains(&puzzle.grid, w)));
//! ```

pub mod generation;
pub mod grid;
pub mod search;
pub mod trials;

// Core module re-exports
pub use generation::*;
pub use grid::*;
pub use search::*;
pub use trials::*;

/// Core error type for word search generation.
#[derive(thiserror::Error, Debug)]
pub enum WordSearchError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Grid contents are malformed
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A vocabulary word cannot be used
    #[error("Invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },

    /// The same word appears twice in a vocabulary
    #[error("Duplicate word: {0}")]
    DuplicateWord(String),

    /// A diagonal-required word is not part of the vocabulary
    #[error("Diagonal word {0} is not in the vocabulary")]
    UnknownDiagonalWord(String),

    /// Generation produced an inconsistent puzzle
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the crate.
pub type WordSearchResult<T> = Result<T, WordSearchError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants.
pub mod config {
    /// Default grid height in cells
    pub const DEFAULT_ROWS: usize = 12;

    /// Default grid width in cells
    pub const DEFAULT_COLS: usize = 12;

    /// Randomized placement attempts per word
    pub const DEFAULT_MAX_RANDOM_ATTEMPTS: u32 = 400;

    /// Default number of harness trials
    pub const DEFAULT_TRIALS: usize = 20;

    /// Coverage rate below which a trial run counts as a regression
    pub const REGRESSION_THRESHOLD: f64 = 0.9;

    /// Default vocabulary
    pub const DEFAULT_WORDS: &[&str] = &[
        "LOVELY",
        "BEAUTIFUL",
        "GORGEOUS",
        "AMAZING",
        "VALENTINE",
        "PRETTY",
        "SWEET",
        "CUTE",
        "MINE",
    ];

    /// Words in [`DEFAULT_WORDS`] that must lie on a diagonal
    pub const DEFAULT_DIAGONAL_WORDS: &[&str] = &["VALENTINE", "PRETTY", "SWEET", "CUTE"];
}
