//! # Generation Module
//!
//! Word search generation: configuration, vocabulary handling and the placer.
//!
//! Generation works on explicit values only. The vocabulary, grid size and
//! random source are all passed in, and every call builds its own grid and
//! ownership map, so independent generations never share state.

pub mod placer;

pub use placer::*;

use crate::{WordSearchError, WordSearchResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Configuration for word search generation.
///
/// Controls the grid size, the random seed, and how hard the randomized
/// phase tries before handing a word over to the deterministic fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Random placement attempts per word before falling back to a full scan
    pub max_random_attempts: u32,
    /// Probability that a word's letters are reversed before placement (0.0 to 1.0)
    pub reverse_chance: f64,
}

impl GenerationConfig {
    /// Creates the default 12×12 configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!((config.rows, config.cols), (12, 12));
    /// assert_eq!(config.max_random_attempts, 400);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rows: crate::config::DEFAULT_ROWS,
            cols: crate::config::DEFAULT_COLS,
            max_random_attempts: crate::config::DEFAULT_MAX_RANDOM_ATTEMPTS,
            reverse_chance: 0.5,
        }
    }

    /// Creates a configuration for testing with a smaller grid and fewer attempts.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            rows: 10,
            cols: 10,
            max_random_attempts: 100,
            reverse_chance: 0.5,
        }
    }

    /// Creates a configuration for large, roomy grids.
    pub fn for_large_grid(seed: u64) -> Self {
        Self {
            seed,
            rows: 20,
            cols: 20,
            max_random_attempts: 1000,
            reverse_chance: 0.5,
        }
    }

    /// Returns a copy with a different grid size.
    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> WordSearchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a usable grid.
    pub fn validate(&self) -> WordSearchResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(WordSearchError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.reverse_chance) {
            return Err(WordSearchError::InvalidConfig(format!(
                "reverse_chance must be within 0.0..=1.0, got {}",
                self.reverse_chance
            )));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// An ordered list of distinct uppercase words, some of which must be
/// placed on a diagonal.
///
/// # Examples
///
/// ```
/// use wordsearch::Vocabulary;
///
/// let vocabulary = Vocabulary::new(&["mine", "cute", "sweet"], &["Sweet"]).unwrap();
/// assert_eq!(vocabulary.words(), &["MINE", "CUTE", "SWEET"]);
/// assert!(vocabulary.is_diagonal_required(2));
/// assert_eq!(vocabulary.placement_order(), vec![2, 0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    diagonal_required: Vec<bool>,
}

impl Vocabulary {
    /// Builds a vocabulary, upper-casing every word.
    ///
    /// Fails on empty words, words with letters outside `A`–`Z`, duplicates,
    /// and diagonal-required words that are not part of `words`.
    pub fn new<S, D>(words: &[S], diagonal_required: &[D]) -> WordSearchResult<Self>
    where
        S: AsRef<str>,
        D: AsRef<str>,
    {
        let mut normalized = Vec::with_capacity(words.len());
        let mut seen = HashSet::new();

        for raw in words {
            let word = normalize_word(raw.as_ref())?;
            if !seen.insert(word.clone()) {
                return Err(WordSearchError::DuplicateWord(word));
            }
            normalized.push(word);
        }

        let mut flags = vec![false; normalized.len()];
        for raw in diagonal_required {
            let word = normalize_word(raw.as_ref())?;
            match normalized.iter().position(|w| *w == word) {
                Some(index) => flags[index] = true,
                None => return Err(WordSearchError::UnknownDiagonalWord(word)),
            }
        }

        Ok(Self {
            words: normalized,
            diagonal_required: flags,
        })
    }

    /// The words in vocabulary order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the word at `index` must be placed on a diagonal.
    pub fn is_diagonal_required(&self, index: usize) -> bool {
        self.diagonal_required.get(index).copied().unwrap_or(false)
    }

    /// Diagonal-required words in vocabulary order.
    pub fn diagonal_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .enumerate()
            .filter(|(i, _)| self.diagonal_required[*i])
            .map(|(_, w)| w.as_str())
            .collect()
    }

    /// Processing order: diagonal-required words first, then the rest,
    /// each group in vocabulary order.
    pub fn placement_order(&self) -> Vec<usize> {
        let (diagonal, rest): (Vec<usize>, Vec<usize>) =
            (0..self.words.len()).partition(|&i| self.diagonal_required[i]);
        diagonal.into_iter().chain(rest).collect()
    }

    /// Length of the longest word, or 0 when empty.
    pub fn longest_word_len(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            words: crate::config::DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            diagonal_required: crate::config::DEFAULT_WORDS
                .iter()
                .map(|w| crate::config::DEFAULT_DIAGONAL_WORDS.contains(w))
                .collect(),
        }
    }
}

fn normalize_word(raw: &str) -> WordSearchResult<String> {
    let word = raw.trim().to_ascii_uppercase();
    if word.is_empty() {
        return Err(WordSearchError::InvalidWord {
            word: raw.to_string(),
            reason: "word is empty".to_string(),
        });
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(WordSearchError::InvalidWord {
            word: raw.to_string(),
            reason: "only the letters A-Z are supported".to_string(),
        });
    }
    Ok(word)
}

/// Trait for procedural generators.
///
/// Generators take their dimensions and seed from a [`GenerationConfig`] and
/// draw all randomness from the supplied RNG, so a fixed seed reproduces the
/// same output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordSearchResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WordSearchResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Draws a uniformly random uppercase letter.
    pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
        char::from(rng.gen_range(b'A'..=b'Z'))
    }

    /// Reverses the letter order of a word.
    pub fn reversed(word: &str) -> String {
        word.chars().rev().collect()
    }
}
