use alloc::vec::Vec;

use rand::Rng;

use crate::*;

/// Cells that may still grow a neighbor.
///
/// Picks are uniform over the whole live set and exhausted cells are dropped
/// with a swap-remove, so both operations stay O(1). A picked cell stays in the
/// set until it runs out of moves.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    cells: Vec<Coord2>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(start: Coord2) -> Self {
        let mut frontier = Self::new();
        frontier.push(start);
        frontier
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn push(&mut self, coords: Coord2) {
        self.cells.push(coords);
    }

    /// Uniformly random `(index, coords)`, or `None` when empty.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(usize, Coord2)> {
        if self.cells.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cells.len());
        Some((index, self.cells[index]))
    }

    pub fn remove(&mut self, index: usize) -> Option<Coord2> {
        (index < self.cells.len()).then(|| self.cells.swap_remove(index))
    }
}
