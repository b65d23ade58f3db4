#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use generator::*;
pub use grid::*;
pub use room::*;
pub use settings::*;
pub use types::*;

mod error;
mod generator;
mod grid;
mod room;
mod settings;
#[cfg(test)]
mod test_support;
mod types;

/// Smallest side length that still leaves an interior inside the border.
pub const MIN_SIDE: Coord = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// `(height, width)`
    pub size: Coord2,
    /// Occupied cells to aim for, start included. At most the interior cell count.
    pub target_rooms: CellCount,
    /// Percent of all cells after which expansion gives up.
    pub density_ceiling: u8,
}

impl LayoutConfig {
    pub const fn new_unchecked(size: Coord2, target_rooms: CellCount, density_ceiling: u8) -> Self {
        Self {
            size,
            target_rooms,
            density_ceiling,
        }
    }

    pub fn new((height, width): Coord2, target_rooms: CellCount) -> Self {
        let height = height.clamp(MIN_SIDE, Coord::MAX);
        let width = width.clamp(MIN_SIDE, Coord::MAX);
        let target_rooms = target_rooms.clamp(1, mult(height - 2, width - 2));
        Self::new_unchecked((height, width), target_rooms, DEFAULT_DENSITY_CEILING)
    }

    pub fn with_density_ceiling(mut self, percent: u8) -> Self {
        self.density_ceiling = percent.clamp(1, 100);
        self
    }

    /// Center of the grid, biased toward the top-left on even sides.
    pub const fn start(&self) -> Coord2 {
        (self.size.0 / 2, self.size.1 / 2)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn density_limit(&self) -> CellCount {
        let limit = u32::from(self.total_cells()) * u32::from(self.density_ceiling) / 100;
        (limit as CellCount).max(1)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new((15, 15), 45)
    }
}

/// A fully generated and classified dungeon. Only built once both generation
/// phases are done, so it never exposes corridor cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dungeon {
    grid: Grid,
    start: Coord2,
    seed: u64,
    expansion: ExpansionReport,
    classification: ClassificationReport,
}

impl Dungeon {
    pub(crate) fn new(
        grid: Grid,
        start: Coord2,
        seed: u64,
        expansion: ExpansionReport,
        classification: ClassificationReport,
    ) -> Self {
        Self {
            grid,
            start,
            seed,
            expansion,
            classification,
        }
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn room_at(&self, coords: Coord2) -> Option<RoomType> {
        self.grid.get(coords)
    }

    pub fn count(&self, room: RoomType) -> CellCount {
        self.grid.count(room)
    }

    pub fn occupied_count(&self) -> CellCount {
        self.grid.occupied_count()
    }

    /// The start cell and the up to 8 cells around it.
    pub fn safe_zone(&self) -> impl Iterator<Item = Coord2> + use<> {
        core::iter::once(self.start).chain(self.grid.iter_neighbors(self.start))
    }

    pub fn expansion(&self) -> &ExpansionReport {
        &self.expansion
    }

    pub fn classification(&self) -> &ClassificationReport {
        &self.classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_degenerate_values() {
        let config = LayoutConfig::new((0, 1), 0);

        assert_eq!(config.size, (MIN_SIDE, MIN_SIDE));
        assert_eq!(config.target_rooms, 1);
        assert_eq!(config.density_ceiling, DEFAULT_DENSITY_CEILING);
    }

    #[test]
    fn config_target_is_capped_by_interior_cells() {
        assert_eq!(LayoutConfig::new((4, 5), 500).target_rooms, 6);
        assert_eq!(LayoutConfig::new((3, 3), 9).target_rooms, 1);
        assert_eq!(LayoutConfig::new((10, 10), 64).target_rooms, 64);
        assert_eq!(LayoutConfig::new((10, 10), 65).target_rooms, 64);
    }

    #[test]
    fn start_is_integer_center() {
        assert_eq!(LayoutConfig::new((10, 7), 5).start(), (5, 3));
        assert_eq!(LayoutConfig::new((3, 3), 1).start(), (1, 1));
    }

    #[test]
    fn density_limit_follows_ceiling() {
        let config = LayoutConfig::new((10, 10), 50).with_density_ceiling(80);

        assert_eq!(config.density_limit(), 80);
        assert_eq!(config.with_density_ceiling(0).density_ceiling, 1);
        assert_eq!(config.with_density_ceiling(200).density_ceiling, 100);
    }

    #[test]
    fn config_limit_matches_expansion_limit() {
        let config = LayoutConfig::new((12, 9), 30).with_density_ceiling(60);
        let grid = Grid::new(12, 9).unwrap();

        assert_eq!(
            config.density_limit(),
            ExpansionGenerator::new(config.density_ceiling).density_limit(&grid)
        );
    }

    #[test]
    fn dungeon_safe_zone_includes_start_and_neighbors() {
        let dungeon = SeededDungeonGenerator::new(0)
            .generate(LayoutConfig::new((9, 9), 20), &RoomSettings::default())
            .unwrap();

        let zone: alloc::vec::Vec<_> = dungeon.safe_zone().collect();

        assert_eq!(zone.len(), 9);
        assert_eq!(zone[0], (4, 4));
    }
}
