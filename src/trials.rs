//! # Trial Harness
//!
//! Runs many seeded generations and checks each one with the locator.
//!
//! Trial `i` is seeded with `seed + i`, so a report can be reproduced exactly
//! and a failing trial can be regenerated on its own.

use crate::generation::utils;
use crate::{
    search, GenerationConfig, Puzzle, Vocabulary, WordSearchError, WordSearchGenerator,
    WordSearchResult,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a single word passed its check across a trial run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Aggregated results of a trial run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Number of generations performed
    pub total_trials: usize,
    /// Grid rows used for every trial
    pub rows: usize,
    /// Grid columns used for every trial
    pub cols: usize,
    /// Trials in which every vocabulary word was found
    pub all_words_found: usize,
    /// Trials in which every diagonal-required word was found on a diagonal
    pub all_diagonals_placed: usize,
    /// Per-word count of trials where the word was found anywhere
    pub word_counts: Vec<WordCount>,
    /// Per-word count of trials where a diagonal-required word was on a diagonal
    pub diagonal_counts: Vec<WordCount>,
    /// 1-based numbers of the trials with a missing diagonal word
    pub missing_diagonal_trials: Vec<usize>,
}

impl TrialReport {
    fn empty(vocabulary: &Vocabulary, rows: usize, cols: usize) -> Self {
        Self {
            total_trials: 0,
            rows,
            cols,
            all_words_found: 0,
            all_diagonals_placed: 0,
            word_counts: zero_counts(vocabulary.words().iter().map(String::as_str)),
            diagonal_counts: zero_counts(vocabulary.diagonal_words()),
            missing_diagonal_trials: Vec::new(),
        }
    }

    /// Records the outcome of one generated puzzle.
    fn record(&mut self, trial: usize, puzzle: &Puzzle) {
        self.total_trials += 1;

        let mut all_found = true;
        for entry in &mut self.word_counts {
            if search::contains(&puzzle.grid, &entry.word) {
                entry.count += 1;
            } else {
                all_found = false;
            }
        }
        if all_found {
            self.all_words_found += 1;
        }

        let mut all_diagonal = true;
        for entry in &mut self.diagonal_counts {
            if search::contains_on_diagonal(&puzzle.grid, &entry.word) {
                entry.count += 1;
            } else {
                all_diagonal = false;
            }
        }
        if all_diagonal {
            self.all_diagonals_placed += 1;
        } else {
            self.missing_diagonal_trials.push(trial + 1);
        }
    }

    /// Fraction of trials in which every word was found.
    pub fn coverage_rate(&self) -> f64 {
        ratio(self.all_words_found, self.total_trials)
    }

    /// Fraction of trials in which every diagonal word was on a diagonal.
    pub fn diagonal_rate(&self) -> f64 {
        ratio(self.all_diagonals_placed, self.total_trials)
    }

    /// Whether coverage fell below `threshold` or any diagonal word went missing.
    pub fn is_regression(&self, threshold: f64) -> bool {
        self.coverage_rate() < threshold || !self.missing_diagonal_trials.is_empty()
    }
}

fn zero_counts<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<WordCount> {
    words
        .into_iter()
        .map(|word| WordCount {
            word: word.to_string(),
            count: 0,
        })
        .collect()
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_trials;
        writeln!(
            f,
            "===== Word search generation check ({} trials, {}x{}) =====",
            total, self.rows, self.cols
        )?;
        writeln!(f)?;
        writeln!(f, "All words found: {}/{}", self.all_words_found, total)?;
        writeln!(
            f,
            "All {} diagonals placed: {}/{}",
            self.diagonal_counts.len(),
            self.all_diagonals_placed,
            total
        )?;

        writeln!(f)?;
        writeln!(f, "Word placement rates:")?;
        for entry in &self.word_counts {
            writeln!(
                f,
                "  {}: {}/{} ({:.1}%)",
                entry.word,
                entry.count,
                total,
                ratio(entry.count, total) * 100.0
            )?;
        }

        if !self.diagonal_counts.is_empty() {
            writeln!(f)?;
            writeln!(f, "Diagonal placement rates:")?;
            for entry in &self.diagonal_counts {
                writeln!(
                    f,
                    "  {}: {}/{} ({:.1}%)",
                    entry.word,
                    entry.count,
                    total,
                    ratio(entry.count, total) * 100.0
                )?;
            }
        }

        writeln!(f)?;
        if self.missing_diagonal_trials.is_empty() {
            writeln!(f, "All diagonals placed in every trial")?;
        } else {
            let trials: Vec<String> = self
                .missing_diagonal_trials
                .iter()
                .map(usize::to_string)
                .collect();
            writeln!(f, "Missing diagonals in trials: {}", trials.join(", "))?;
        }
        write!(
            f,
            "All {} words present in every trial: {}",
            self.word_counts.len(),
            if self.all_words_found == total { "YES" } else { "NO" }
        )
    }
}

/// Drives repeated generations of one vocabulary and grid size.
#[derive(Debug, Clone)]
pub struct TrialRunner {
    generator: WordSearchGenerator,
    config: GenerationConfig,
    trials: usize,
}

impl TrialRunner {
    /// Creates a runner; trial `i` uses `config.seed + i`.
    pub fn new(vocabulary: Vocabulary, config: GenerationConfig, trials: usize) -> Self {
        Self {
            generator: WordSearchGenerator::new(vocabulary),
            config,
            trials,
        }
    }

    /// Configuration for the given trial number (0-based).
    pub fn trial_config(&self, trial: usize) -> GenerationConfig {
        GenerationConfig {
            seed: self.config.seed.wrapping_add(trial as u64),
            ..self.config.clone()
        }
    }

    /// Regenerates the puzzle of a single trial (0-based).
    pub fn puzzle(&self, trial: usize) -> WordSearchResult<Puzzle> {
        let config = self.trial_config(trial);
        let mut rng = utils::create_rng(&config);
        self.generator.build(&config, &mut rng)
    }

    /// Runs every trial and aggregates the locator's verdicts.
    pub fn run(&self) -> WordSearchResult<TrialReport> {
        if self.trials == 0 {
            return Err(WordSearchError::InvalidConfig(
                "at least one trial is required".to_string(),
            ));
        }
        self.config.validate()?;

        info!(
            "Running {} trials on a {}x{} grid starting at seed {}",
            self.trials, self.config.rows, self.config.cols, self.config.seed
        );

        let mut report =
            TrialReport::empty(self.generator.vocabulary(), self.config.rows, self.config.cols);

        for trial in 0..self.trials {
            let puzzle = self.puzzle(trial)?;
            debug!("Trial {} grid:\n{}", trial + 1, puzzle.grid);
            report.record(trial, &puzzle);
        }

        if !report.missing_diagonal_trials.is_empty() {
            warn!(
                "Diagonal words missing in {} of {} trials",
                report.missing_diagonal_trials.len(),
                report.total_trials
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn test_record_counts_found_words() {
        let vocabulary = Vocabulary::new(&["SUN", "CAT"], &["SUN"]).unwrap();
        let mut report = TrialReport::empty(&vocabulary, 3, 3);

        let diagonal = Grid::from_rows(&["SXX", "XUX", "XXN"]).unwrap();
        let straight = Grid::from_rows(&["SUN", "CAT", "XXX"]).unwrap();
        let puzzle = |grid: Grid| Puzzle {
            grid,
            owners: Default::default(),
            placements: Vec::new(),
            unplaced: Vec::new(),
        };

        report.record(0, &puzzle(diagonal));
        report.record(1, &puzzle(straight));

        assert_eq!(report.total_trials, 2);
        assert_eq!(report.all_words_found, 1);
        assert_eq!(report.all_diagonals_placed, 1);
        assert_eq!(report.word_counts[0], WordCount { word: "SUN".to_string(), count: 2 });
        assert_eq!(report.word_counts[1], WordCount { word: "CAT".to_string(), count: 1 });
        assert_eq!(report.missing_diagonal_trials, vec![2]);
        assert_eq!(report.coverage_rate(), 0.5);
        assert!(report.is_regression(0.4));
    }

    #[test]
    fn test_trial_configs_step_the_seed() {
        let runner = TrialRunner::new(Vocabulary::default(), GenerationConfig::new(10), 3);
        assert_eq!(runner.trial_config(0).seed, 10);
        assert_eq!(runner.trial_config(2).seed, 12);
        assert_eq!(runner.trial_config(2).rows, 12);
    }

    #[test]
    fn test_zero_trials_is_rejected() {
        let runner = TrialRunner::new(Vocabulary::default(), GenerationConfig::new(10), 0);
        assert!(matches!(runner.run(), Err(WordSearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_report_display() {
        let runner = TrialRunner::new(
            Vocabulary::new(&["CUTE"], &["CUTE"]).unwrap(),
            GenerationConfig::new(1),
            5,
        );
        let report = runner.run().unwrap();
        let text = report.to_string();
        assert!(text.contains("All words found: 5/5"));
        assert!(text.contains("CUTE: 5/5 (100.0%)"));
        assert!(text.contains("All diagonals placed in every trial"));
        assert!(!report.is_regression(crate::config::REGRESSION_THRESHOLD));
    }
}
