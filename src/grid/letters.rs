//! # Letter Grid
//!
//! The finished rows×cols matrix of uppercase letters handed out by the placer.

use super::Position;
use crate::{WordSearchError, WordSearchResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully populated word search grid.
///
/// Every cell holds exactly one uppercase letter `A`–`Z`. A `Grid` is never
/// mutated once generation returns it.
///
/// # Examples
///
/// ```
/// use wordsearch::{Grid, Position};
///
/// let grid = Grid::from_rows(&["CAT", "DOG"]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid.get(Position::new(1, 2)), Some('G'));
/// assert_eq!(grid.get(Position::new(2, 0)), None);
/// ```
///
/// Serialized as a list of rows; deserialization goes through
/// [`Grid::from_cells`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<char>>", into = "Vec<Vec<char>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a grid from row-major cells, checking shape and letters.
    pub fn from_cells(cells: Vec<Vec<char>>) -> WordSearchResult<Self> {
        let rows = cells.len();
        let cols = cells.first().map(Vec::len).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(WordSearchError::InvalidGrid(
                "grid must have at least one row and one column".to_string(),
            ));
        }

        for (r, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(WordSearchError::InvalidGrid(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            if let Some(c) = row.iter().position(|ch| !ch.is_ascii_uppercase()) {
                return Err(WordSearchError::InvalidGrid(format!(
                    "cell ({}, {}) holds {:?}, expected an uppercase letter",
                    r, c, row[c]
                )));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Builds a grid without checking it, for exercising validation.
    #[cfg(test)]
    pub(crate) fn from_cells_unchecked(cells: Vec<Vec<char>>) -> Self {
        Self {
            rows: cells.len(),
            cols: cells.first().map(Vec::len).unwrap_or(0),
            cells,
        }
    }

    /// Builds a grid from one string per row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> WordSearchResult<Self> {
        Self::from_cells(rows.iter().map(|row| row.as_ref().chars().collect()).collect())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the letter at a position, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Gets a full row of letters.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterates over every `(position, letter)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &letter)| (Position::new(r, c), letter))
        })
    }

    /// Checks if a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = WordSearchError;

    fn try_from(cells: Vec<Vec<char>>) -> WordSearchResult<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Vec<Vec<char>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
