//! # Word Placement
//!
//! Places a vocabulary into a letter grid and fills the remaining cells with
//! noise letters.
//!
//! Each word goes through two phases:
//! 1. A bounded randomized phase that picks an orientation and a uniformly
//!    random anchor, accepting the first slot whose cells are empty or already
//!    hold the same letter
//! 2. A deterministic fallback that scans every diagonal slot (for
//!    diagonal-required words) and then every horizontal slot
//!
//! A word that fits nowhere is reported in [`Puzzle::unplaced`]; it never
//! aborts generation of the other words.

use crate::generation::utils;
use crate::{
    search, Direction, GenerationConfig, Generator, Grid, OwnershipMap, Position, Vocabulary,
    WordSearchError, WordSearchResult,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Primary word search generator.
///
/// Words requiring a diagonal are placed first since diagonal slots are the
/// scarcest; the remaining words follow in vocabulary order.
#[derive(Debug, Clone)]
pub struct WordSearchGenerator {
    vocabulary: Vocabulary,
}

/// The phase that committed a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPhase {
    /// Random orientation and anchor
    Randomized,
    /// Exhaustive scan over the four diagonals
    DiagonalFallback,
    /// Exhaustive row-major scan over horizontal slots
    HorizontalFallback,
}

/// Where and how a word was written into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the word in the vocabulary
    pub word_index: usize,
    /// The vocabulary word
    pub word: String,
    /// Letters in the order they were written from the anchor
    pub letters: String,
    /// Cell holding the first written letter
    pub anchor: Position,
    /// Direction the letters run from the anchor
    pub direction: Direction,
    /// Whether `letters` is the word reversed
    pub reversed: bool,
    /// Whether the word was required to lie on a diagonal
    pub diagonal_required: bool,
    /// Phase that found the slot
    pub phase: PlacementPhase,
}

impl Placement {
    /// Cells covered by this placement, in writing order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.letters.len()).filter_map(move |i| self.anchor.step(self.direction, i))
    }

    /// True when the word was required on a diagonal but landed elsewhere.
    pub fn violates_diagonal(&self) -> bool {
        self.diagonal_required && !self.direction.is_diagonal()
    }
}

/// Why a word could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementFailure {
    /// The word is longer than every run it may use in this grid
    GeometryInfeasible,
    /// Slots existed but every one conflicted with earlier words
    Exhausted,
}

/// A vocabulary word missing from the generated grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedWord {
    pub word_index: usize,
    pub word: String,
    pub reason: PlacementFailure,
}

/// The result of one generation: the grid plus everything needed to audit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The filled letter grid
    pub grid: Grid,
    /// Which words cover which cells
    pub owners: OwnershipMap,
    /// Committed placements in processing order
    pub placements: Vec<Placement>,
    /// Words that found no slot
    pub unplaced: Vec<UnplacedWord>,
}

impl Puzzle {
    /// Whether every vocabulary word was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Finds the placement of a word (case-insensitive).
    pub fn placement_for(&self, word: &str) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|p| p.word.eq_ignore_ascii_case(word))
    }

    /// Diagonal-required words that the last-resort horizontal scan placed.
    pub fn diagonal_violations(&self) -> Vec<&Placement> {
        self.placements
            .iter()
            .filter(|p| p.violates_diagonal())
            .collect()
    }
}

/// Valid anchor cells for a word of `len` letters running along `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRange {
    pub rows: RangeInclusive<usize>,
    pub cols: RangeInclusive<usize>,
}

/// Computes the anchor cells from which a `len`-letter run along `direction`
/// stays inside a `rows`×`cols` grid.
///
/// Returns `None` when no anchor exists.
///
/// # Examples
///
/// ```
/// use wordsearch::{anchor_range, Direction};
///
/// let range = anchor_range(Direction::Northwest, 4, 12, 12).unwrap();
/// assert_eq!(range.rows, 3..=11);
/// assert_eq!(range.cols, 3..=11);
/// assert!(anchor_range(Direction::South, 13, 12, 12).is_none());
/// ```
pub fn anchor_range(
    direction: Direction,
    len: usize,
    rows: usize,
    cols: usize,
) -> Option<AnchorRange> {
    let (dr, dc) = direction.to_delta();
    Some(AnchorRange {
        rows: axis_span(dr, len, rows)?,
        cols: axis_span(dc, len, cols)?,
    })
}

fn axis_span(delta: isize, len: usize, extent: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 || extent == 0 {
        return None;
    }
    match delta {
        // The run does not move along this axis
        0 => Some(0..=extent - 1),
        _ if len > extent => None,
        d if d > 0 => Some(0..=extent - len),
        _ => Some(len - 1..=extent - 1),
    }
}

/// Generates a puzzle for `vocabulary` on a `rows`×`cols` grid.
///
/// Uses the default attempt budget and a fair reversal coin. All randomness
/// comes from `rng`, so a seeded RNG reproduces the same puzzle.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use wordsearch::{contains_on_diagonal, generate, Vocabulary};
///
/// let vocabulary = Vocabulary::new(&["CUTE"], &["CUTE"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let puzzle = generate(&vocabulary, 12, 12, &mut rng).unwrap();
/// assert!(contains_on_diagonal(&puzzle.grid, "CUTE"));
/// ```
pub fn generate<R: Rng + ?Sized>(
    vocabulary: &Vocabulary,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> WordSearchResult<Puzzle> {
    let config = GenerationConfig::default().with_size(rows, cols);
    WordSearchGenerator::new(vocabulary.clone()).build(&config, rng)
}

/// A word prepared for placement.
#[derive(Debug)]
struct Candidate<'a> {
    word: &'a str,
    letters: Vec<char>,
    reversed: bool,
    diagonal: bool,
}

/// A slot found by one of the placement phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    anchor: Position,
    direction: Direction,
    phase: PlacementPhase,
}

/// Working grid used while placing words.
#[derive(Debug)]
struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<char>>>,
    owners: OwnershipMap,
}

impl Board {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![None; cols]; rows],
            owners: OwnershipMap::new(rows, cols),
        }
    }

    fn cell(&self, pos: Position) -> Option<char> {
        self.cells[pos.row][pos.col]
    }

    /// Every covered cell must be empty or already hold the same letter.
    fn fits(&self, letters: &[char], anchor: Position, direction: Direction) -> bool {
        letters.iter().enumerate().all(|(i, &letter)| {
            match anchor.step_within(direction, i, self.rows, self.cols) {
                Some(pos) => self.cell(pos).map_or(true, |existing| existing == letter),
                None => false,
            }
        })
    }

    fn commit(
        &mut self,
        letters: &[char],
        anchor: Position,
        direction: Direction,
        word_index: usize,
    ) {
        for (i, &letter) in letters.iter().enumerate() {
            if let Some(pos) = anchor.step_within(direction, i, self.rows, self.cols) {
                self.cells[pos.row][pos.col] = Some(letter);
                self.owners.claim(pos, word_index);
            }
        }
    }

    /// Fills every empty cell with an independent random letter.
    fn finish<R: Rng + ?Sized>(self, rng: &mut R) -> WordSearchResult<(Grid, OwnershipMap)> {
        let cells: Vec<Vec<char>> = self
            .cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| utils::random_letter(rng)))
                    .collect::<Vec<char>>()
            })
            .collect();
        Ok((Grid::from_cells(cells)?, self.owners))
    }
}

impl WordSearchGenerator {
    /// Creates a generator for the given vocabulary.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this generator places.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Places every word and fills the rest of the grid.
    ///
    /// Fails only for an invalid configuration; per-word failures are
    /// collected in [`Puzzle::unplaced`].
    pub fn build<R: Rng + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> WordSearchResult<Puzzle> {
        config.validate()?;

        let mut board = Board::new(config.rows, config.cols);
        let mut placements = Vec::with_capacity(self.vocabulary.len());
        let mut unplaced = Vec::new();

        for index in self.vocabulary.placement_order() {
            let word = self.vocabulary.words()[index].as_str();
            let reversed = rng.gen_bool(config.reverse_chance);
            let letters = if reversed {
                utils::reversed(word)
            } else {
                word.to_string()
            };
            let candidate = Candidate {
                word,
                letters: letters.chars().collect(),
                reversed,
                diagonal: self.vocabulary.is_diagonal_required(index),
            };

            let slot = self
                .try_random_placement(&board, &candidate, config, rng)
                .or_else(|| self.try_fallback_placement(&board, &candidate));

            match slot {
                Some(slot) => {
                    board.commit(&candidate.letters, slot.anchor, slot.direction, index);
                    let placement = Placement {
                        word_index: index,
                        word: word.to_string(),
                        letters: candidate.letters.iter().collect(),
                        anchor: slot.anchor,
                        direction: slot.direction,
                        reversed: candidate.reversed,
                        diagonal_required: candidate.diagonal,
                        phase: slot.phase,
                    };
                    if placement.violates_diagonal() {
                        warn!(
                            "{} requires a diagonal but was placed {:?} at {}",
                            candidate.word, slot.direction, slot.anchor
                        );
                    } else {
                        debug!(
                            "Placed {} {:?} at {} ({:?})",
                            candidate.word, slot.direction, slot.anchor, slot.phase
                        );
                    }
                    placements.push(placement);
                }
                None => {
                    let reason = if self.geometry_feasible(&candidate, config) {
                        PlacementFailure::Exhausted
                    } else {
                        PlacementFailure::GeometryInfeasible
                    };
                    warn!(
                        "Could not place {} in a {}x{} grid: {:?}",
                        word, config.rows, config.cols, reason
                    );
                    unplaced.push(UnplacedWord {
                        word_index: index,
                        word: word.to_string(),
                        reason,
                    });
                }
            }
        }

        let (grid, owners) = board.finish(rng)?;

        info!(
            "Generated {}x{} grid: {} placed, {} unplaced",
            config.rows,
            config.cols,
            placements.len(),
            unplaced.len()
        );

        Ok(Puzzle {
            grid,
            owners,
            placements,
            unplaced,
        })
    }

    /// Randomized phase: up to `max_random_attempts` random orientation and anchor draws.
    fn try_random_placement<R: Rng + ?Sized>(
        &self,
        board: &Board,
        candidate: &Candidate<'_>,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Option<Slot> {
        let len = candidate.letters.len();
        let diagonals = Direction::diagonals();

        for _ in 0..config.max_random_attempts {
            let direction = if candidate.diagonal {
                diagonals[rng.gen_range(0..diagonals.len())]
            } else if rng.gen_bool(0.5) {
                Direction::East
            } else {
                Direction::South
            };

            let Some(range) = anchor_range(direction, len, board.rows, board.cols) else {
                continue;
            };

            let anchor = match direction {
                // Down picks its column first
                Direction::South => {
                    let col = rng.gen_range(range.cols);
                    let row = rng.gen_range(range.rows);
                    Position::new(row, col)
                }
                _ => {
                    let row = rng.gen_range(range.rows);
                    let col = rng.gen_range(range.cols);
                    Position::new(row, col)
                }
            };

            if board.fits(&candidate.letters, anchor, direction) {
                return Some(Slot {
                    anchor,
                    direction,
                    phase: PlacementPhase::Randomized,
                });
            }
        }

        None
    }

    /// Fallback phase: exhaustive diagonal scan for diagonal-required words,
    /// then an exhaustive horizontal scan for any word. First fit wins.
    fn try_fallback_placement(&self, board: &Board, candidate: &Candidate<'_>) -> Option<Slot> {
        let diagonal = if candidate.diagonal {
            Direction::diagonals().into_iter().find_map(|direction| {
                scan_slots(board, &candidate.letters, direction, PlacementPhase::DiagonalFallback)
            })
        } else {
            None
        };

        diagonal.or_else(|| {
            scan_slots(
                board,
                &candidate.letters,
                Direction::East,
                PlacementPhase::HorizontalFallback,
            )
        })
    }

    fn geometry_feasible(&self, candidate: &Candidate<'_>, config: &GenerationConfig) -> bool {
        let len = candidate.letters.len();
        let fits = |direction| anchor_range(direction, len, config.rows, config.cols).is_some();
        if candidate.diagonal {
            Direction::diagonals().into_iter().any(fits) || fits(Direction::East)
        } else {
            fits(Direction::East) || fits(Direction::South)
        }
    }
}

/// Scans anchors for one direction, row by row then column by column.
fn scan_slots(
    board: &Board,
    letters: &[char],
    direction: Direction,
    phase: PlacementPhase,
) -> Option<Slot> {
    let range = anchor_range(direction, letters.len(), board.rows, board.cols)?;
    range.rows.clone().find_map(|row| {
        range.cols.clone().find_map(|col| {
            let anchor = Position::new(row, col);
            board.fits(letters, anchor, direction).then_some(Slot {
                anchor,
                direction,
                phase,
            })
        })
    })
}

impl Generator<Puzzle> for WordSearchGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WordSearchResult<Puzzle> {
        let puzzle = self.build(config, rng)?;
        self.validate(&puzzle, config)?;
        Ok(puzzle)
    }

    /// Re-checks a puzzle with the locator, independently of the placer's bookkeeping.
    fn validate(&self, puzzle: &Puzzle, config: &GenerationConfig) -> WordSearchResult<()> {
        let grid = &puzzle.grid;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(WordSearchError::GenerationFailed(format!(
                "grid is {}x{}, expected {}x{}",
                grid.rows(),
                grid.cols(),
                config.rows,
                config.cols
            )));
        }
        if let Some((pos, letter)) = grid.iter().find(|(_, c)| !c.is_ascii_uppercase()) {
            return Err(WordSearchError::GenerationFailed(format!(
                "cell {} holds {:?}, expected an uppercase letter",
                pos, letter
            )));
        }

        for placement in &puzzle.placements {
            let written: Option<String> = placement.cells().map(|pos| grid.get(pos)).collect();
            if written.as_deref() != Some(placement.letters.as_str()) {
                return Err(WordSearchError::GenerationFailed(format!(
                    "letters of {} were overwritten",
                    placement.word
                )));
            }
            if !search::contains(grid, &placement.word) {
                return Err(WordSearchError::GenerationFailed(format!(
                    "{} is not present in the grid",
                    placement.word
                )));
            }
            if placement.diagonal_required
                && !placement.violates_diagonal()
                && !search::contains_on_diagonal(grid, &placement.word)
            {
                return Err(WordSearchError::GenerationFailed(format!(
                    "{} is not on a diagonal",
                    placement.word
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "WordSearchGenerator"
    }
}
