use core::ops::Index;

use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Fixed-size store of per-cell room types.
///
/// Every accessor is bounds-checked and reports out-of-range coordinates as an
/// ordinary negative result, since generation routinely looks past the edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<RoomType>,
}

impl Grid {
    pub fn new(height: Coord, width: Coord) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GenError::InvalidDimensions);
        }
        Ok(Self {
            cells: Array2::default((height, width).to_nd_index()),
        })
    }

    /// `(height, width)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // construction only accepts `Coord` dimensions
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (height, width) = self.size();
        mult(height, width)
    }

    /// Inside the one-cell border that generation always leaves empty.
    pub fn is_interior(&self, coords: Coord2) -> bool {
        let (height, width) = self.size();
        (1..height.saturating_sub(1)).contains(&coords.0)
            && (1..width.saturating_sub(1)).contains(&coords.1)
    }

    pub fn get(&self, coords: Coord2) -> Option<RoomType> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Returns whether the write happened.
    pub fn set(&mut self, coords: Coord2, room: RoomType) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) => {
                *cell = room;
                true
            }
            None => false,
        }
    }

    /// Out-of-bounds counts as unoccupied, so the map edge behaves like open
    /// empty space rather than a wall.
    pub fn is_occupied(&self, coords: Coord2) -> bool {
        self.get(coords).is_some_and(RoomType::is_occupied)
    }

    /// Like [`Grid::is_occupied`] for the cell at `coords + delta`, where the
    /// offset may step off the grid in any direction.
    pub fn is_occupied_at(&self, coords: Coord2, delta: (isize, isize)) -> bool {
        apply_delta(coords, delta, self.size()).is_some_and(|pos| self.is_occupied(pos))
    }

    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        apply_delta(coords, direction.delta(), self.size())
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn clear(&mut self) {
        self.cells.fill(RoomType::Empty);
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, RoomType)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &room)| ((row as Coord, col as Coord), room))
    }

    pub fn count(&self, room: RoomType) -> CellCount {
        self.cells.iter().filter(|&&cell| cell == room).count() as CellCount
    }

    pub fn occupied_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_occupied()).count() as CellCount
    }
}

impl Index<Coord2> for Grid {
    type Output = RoomType;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
