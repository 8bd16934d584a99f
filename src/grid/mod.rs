//! # Grid Module
//!
//! Core grid representation shared by the placer and the locator.
//!
//! This module contains the fundamental building blocks of a word search:
//! - Cell coordinates and the eight run directions
//! - The finished, read-only letter grid
//! - The ownership map recording which words cover which cells

pub mod letters;
pub mod ownership;

pub use letters::*;
pub use ownership::*;

use serde::{Deserialize, Serialize};

/// Represents a cell coordinate in the grid.
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the
/// top-left cell.
///
/// # Examples
///
/// ```
/// use wordsearch::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::Southeast, 2), Some(Position::new(4, 5)));
/// assert_eq!(pos.step(Direction::North, 3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Moves `steps` cells along `direction`.
    ///
    /// Returns `None` when the move would go above row 0 or left of column 0.
    /// The upper bounds are not checked here; see [`Position::step_within`].
    pub fn step(self, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.to_delta();
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        Some(Position::new(row, col))
    }

    /// Like [`Position::step`], but also rejects cells outside a `rows`×`cols` grid.
    pub fn step_within(
        self,
        direction: Direction,
        steps: usize,
        rows: usize,
        cols: usize,
    ) -> Option<Position> {
        self.step(direction, steps)
            .filter(|pos| pos.row < rows && pos.col < cols)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The eight unit directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    /// Converts a direction to a `(row, col)` delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordsearch::Direction;
    ///
    /// assert_eq!(Direction::North.to_delta(), (-1, 0));
    /// assert_eq!(Direction::Southwest.to_delta(), (1, -1));
    /// ```
    pub fn to_delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::Northeast => (-1, 1),
            Direction::Northwest => (-1, -1),
            Direction::Southeast => (1, 1),
            Direction::Southwest => (1, -1),
        }
    }

    /// Converts a `(row, col)` delta to a direction.
    ///
    /// Returns None if the delta doesn't correspond to a unit direction.
    pub fn from_delta(delta: (isize, isize)) -> Option<Direction> {
        match delta {
            (-1, 0) => Some(Direction::North),
            (1, 0) => Some(Direction::South),
            (0, 1) => Some(Direction::East),
            (0, -1) => Some(Direction::West),
            (-1, 1) => Some(Direction::Northeast),
            (-1, -1) => Some(Direction::Northwest),
            (1, 1) => Some(Direction::Southeast),
            (1, -1) => Some(Direction::Southwest),
            _ => None,
        }
    }

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
        }
    }

    /// True when both delta components are non-zero.
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.to_delta();
        dr != 0 && dc != 0
    }

    /// Returns all 8 directions.
    pub fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Northeast,
            Direction::Northwest,
            Direction::Southeast,
            Direction::Southwest,
        ]
    }

    /// Returns the 4 diagonal directions in scan order:
    /// `(1,1)`, `(1,-1)`, `(-1,1)`, `(-1,-1)`.
    pub fn diagonals() -> [Direction; 4] {
        [
            Direction::Southeast,
            Direction::Southwest,
            Direction::Northeast,
            Direction::Northwest,
        ]
    }
}
