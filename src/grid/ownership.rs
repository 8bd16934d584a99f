//! # Ownership Map
//!
//! Per-cell record of which vocabulary words cover each cell, used for
//! collision auditing after generation.

use super::Position;
use serde::{Deserialize, Serialize};

/// For each cell, the indices of the vocabulary words whose placement covers it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OwnershipMap {
    rows: usize,
    cols: usize,
    owners: Vec<Vec<Vec<usize>>>,
}

impl OwnershipMap {
    /// Creates an empty map for a `rows`×`cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            owners: vec![vec![Vec::new(); cols]; rows],
        }
    }

    /// Records that `word_index` covers `pos`. Out-of-bounds positions are ignored.
    pub fn claim(&mut self, pos: Position, word_index: usize) {
        if let Some(cell) = self
            .owners
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
        {
            if !cell.contains(&word_index) {
                cell.push(word_index);
            }
        }
    }

    /// Word indices covering `pos`, in claim order.
    pub fn owners_at(&self, pos: Position) -> &[usize] {
        self.owners
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether any word covers `pos`.
    pub fn is_owned(&self, pos: Position) -> bool {
        !self.owners_at(pos).is_empty()
    }

    /// Cells covered by more than one word, row-major.
    pub fn shared_cells(&self) -> Vec<(Position, &[usize])> {
        self.cells()
            .filter(|(_, owners)| owners.len() > 1)
            .collect()
    }

    /// Number of cells covered by at least one word.
    pub fn owned_count(&self) -> usize {
        self.cells().filter(|(_, owners)| !owners.is_empty()).count()
    }

    /// Dimensions as `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn cells(&self) -> impl Iterator<Item = (Position, &[usize])> + '_ {
        self.owners.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, owners)| (Position::new(r, c), owners.as_slice()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_and_lookup() {
        let mut map = OwnershipMap::new(3, 3);
        assert!(!map.is_owned(Position::new(1, 1)));

        map.claim(Position::new(1, 1), 0);
        map.claim(Position::new(1, 1), 2);
        map.claim(Position::new(1, 1), 2); // Claiming twice should not duplicate
        map.claim(Position::new(0, 2), 1);

        assert_eq!(map.owners_at(Position::new(1, 1)), &[0, 2]);
        assert_eq!(map.owned_count(), 2);
        assert_eq!(map.shared_cells(), vec![(Position::new(1, 1), &[0, 2][..])]);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut map = OwnershipMap::new(2, 2);
        map.claim(Position::new(5, 5), 0);
        assert_eq!(map.owned_count(), 0);
        assert!(map.owners_at(Position::new(5, 5)).is_empty());
        assert_eq!(map.dimensions(), (2, 2));
    }
}
