//! # Word Search Oracle
//!
//! Locates words in a finished [`Grid`].
//!
//! Nothing here knows how the grid was generated: the functions read letters
//! only, so they can verify the placer and accept a player's selections
//! without trusting any placement bookkeeping. A word matches a run when the
//! run spells it forwards or backwards. Matching is case-sensitive and grids
//! only hold uppercase letters, so callers should upper-case their queries.

use crate::{Direction, Grid, Position};
use serde::{Deserialize, Serialize};

/// A located word: reading `len` letters from `start` along `direction`
/// spells the word forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    pub start: Position,
    pub direction: Direction,
    pub len: usize,
}

impl WordMatch {
    /// The cell holding the word's last letter.
    pub fn end(&self) -> Option<Position> {
        self.start.step(self.direction, self.len.saturating_sub(1))
    }

    /// Cells covered by the match, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len).filter_map(move |i| self.start.step(self.direction, i))
    }
}

/// Reports whether `word` or its reversal occurs as a contiguous run in any
/// of the eight directions.
///
/// # Examples
///
/// ```
/// use wordsearch::{contains, Grid};
///
/// let grid = Grid::from_rows(&["CATX", "XXXX", "XXXX"]).unwrap();
/// assert!(contains(&grid, "CAT"));
/// assert!(contains(&grid, "TAC"));
/// assert!(!contains(&grid, "DOG"));
/// ```
pub fn contains(grid: &Grid, word: &str) -> bool {
    find(grid, word).is_some()
}

/// Reports whether `word` or its reversal lies on one of the four diagonals.
pub fn contains_on_diagonal(grid: &Grid, word: &str) -> bool {
    find_on_diagonal(grid, &letters(word)).is_some()
}

/// Finds the first run spelling `word` in either reading direction.
///
/// Rows are scanned first, then columns, then diagonals. Returns `None` for
/// an empty word.
pub fn find(grid: &Grid, word: &str) -> Option<WordMatch> {
    let word = letters(word);
    find_in_lines(grid, &word, Direction::East)
        .or_else(|| find_in_lines(grid, &word, Direction::South))
        .or_else(|| find_on_diagonal(grid, &word))
}

/// Reads `len` letters from `start` along `direction`.
///
/// Returns `None` if the run leaves the grid.
pub fn read_run(grid: &Grid, start: Position, direction: Direction, len: usize) -> Option<String> {
    run(grid, start, direction, len).map(|run| run.into_iter().collect())
}

/// Reads the straight selection from `start` to `end` inclusive.
///
/// Returns `None` when the two cells are not on a common row, column or
/// diagonal, or when either lies outside the grid.
pub fn read_selection(grid: &Grid, start: Position, end: Position) -> Option<String> {
    let dr = end.row as isize - start.row as isize;
    let dc = end.col as isize - start.col as isize;

    if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return None;
    }

    let len = dr.unsigned_abs().max(dc.unsigned_abs()) + 1;
    let direction = Direction::from_delta((dr.signum(), dc.signum())).unwrap_or(Direction::East);
    read_run(grid, start, direction, len)
}

/// Accepts a player's selection if it spells `word` in either direction.
pub fn selection_matches(grid: &Grid, word: &str, start: Position, end: Position) -> bool {
    let word = letters(word);
    if word.is_empty() {
        return false;
    }
    read_selection(grid, start, end)
        .map(|selected| spells(&selected.chars().collect::<Vec<_>>(), &word).is_some())
        .unwrap_or(false)
}

fn letters(word: &str) -> Vec<char> {
    word.chars().collect()
}

fn run(grid: &Grid, start: Position, direction: Direction, len: usize) -> Option<Vec<char>> {
    (0..len)
        .map(|i| {
            start
                .step_within(direction, i, grid.rows(), grid.cols())
                .and_then(|pos| grid.get(pos))
        })
        .collect()
}

/// `Some(false)` if `run` spells `word` forwards, `Some(true)` if backwards.
fn spells(run: &[char], word: &[char]) -> Option<bool> {
    if run == word {
        Some(false)
    } else if run.iter().rev().eq(word.iter()) {
        Some(true)
    } else {
        None
    }
}

fn to_match(start: Position, direction: Direction, len: usize, reversed: bool) -> WordMatch {
    if reversed {
        WordMatch {
            start: start.step(direction, len - 1).unwrap_or(start),
            direction: direction.opposite(),
            len,
        }
    } else {
        WordMatch {
            start,
            direction,
            len,
        }
    }
}

/// Scans every row (East) or every column (South) run of the word's length.
fn find_in_lines(grid: &Grid, word: &[char], direction: Direction) -> Option<WordMatch> {
    let len = word.len();
    if len == 0 {
        return None;
    }

    let (outer, inner) = match direction {
        Direction::South => (grid.cols(), grid.rows()),
        _ => (grid.rows(), grid.cols()),
    };
    if len > inner {
        return None;
    }

    for line in 0..outer {
        for offset in 0..=inner - len {
            let start = match direction {
                Direction::South => Position::new(offset, line),
                _ => Position::new(line, offset),
            };
            let spelled = run(grid, start, direction, len).and_then(|r| spells(&r, word));
            if let Some(reversed) = spelled {
                return Some(to_match(start, direction, len, reversed));
            }
        }
    }

    None
}

/// Tries every start cell in every diagonal direction, discarding runs that
/// leave the grid.
fn find_on_diagonal(grid: &Grid, word: &[char]) -> Option<WordMatch> {
    let len = word.len();
    if len == 0 {
        return None;
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let start = Position::new(row, col);
            for direction in Direction::diagonals() {
                if let Some(reversed) =
                    run(grid, start, direction, len).and_then(|r| spells(&r, word))
                {
                    return Some(to_match(start, direction, len, reversed));
                }
            }
        }
    }

    None
}
