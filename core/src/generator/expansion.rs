use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Frontier;
use crate::*;

/// Default share of all grid cells, in percent, after which expansion stops.
pub const DEFAULT_DENSITY_CEILING: u8 = 75;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    TargetReached,
    FrontierExhausted,
    DensityCeiling,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionReport {
    /// Requested number of occupied cells, start included.
    pub requested: CellCount,
    /// Occupied cells actually placed, start included.
    pub placed: CellCount,
    /// Density ceiling in cells for the grid that was expanded.
    pub limit: CellCount,
    pub stop: StopReason,
}

impl ExpansionReport {
    pub const fn is_partial(&self) -> bool {
        self.placed < self.requested
    }
}

/// Grows one connected, tree-like cluster of corridor cells from the start.
///
/// Each step picks a uniformly random frontier cell rather than the newest or
/// oldest one: a stack pick snakes into long corridors and a queue pick grows a
/// uniform blob, while a random pick gives branching layouts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExpansionGenerator {
    density_ceiling: u8,
}

impl Default for ExpansionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DENSITY_CEILING)
    }
}

impl ExpansionGenerator {
    pub fn new(density_ceiling: u8) -> Self {
        Self {
            density_ceiling: density_ceiling.clamp(1, 100),
        }
    }

    pub const fn density_ceiling(&self) -> u8 {
        self.density_ceiling
    }

    /// Maximum number of occupied cells for `grid`, at least one.
    pub fn density_limit(&self, grid: &Grid) -> CellCount {
        let limit = u32::from(grid.total_cells()) * u32::from(self.density_ceiling) / 100;
        (limit as CellCount).max(1)
    }

    /// Resets `grid`, places the start, then grows corridors until
    /// `target_count` cells (start included) are occupied, the frontier runs
    /// dry, or the density ceiling is hit. Falling short is not an error.
    pub fn run<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        start: Coord2,
        target_count: CellCount,
        rng: &mut R,
    ) -> Result<ExpansionReport> {
        if !grid.is_interior(start) {
            return Err(GenError::InvalidCoords);
        }

        grid.clear();
        grid.set(start, RoomType::Start);

        let limit = self.density_limit(grid);
        let mut frontier = Frontier::seeded(start);
        let mut placed: CellCount = 1;

        log::debug!(
            "Expanding {:?} grid from {:?}, target {}, ceiling {}",
            grid.size(),
            start,
            target_count,
            limit
        );

        let stop = loop {
            if placed >= target_count {
                break StopReason::TargetReached;
            }
            if placed >= limit {
                break StopReason::DensityCeiling;
            }
            let Some((index, coords)) = frontier.pick(rng) else {
                break StopReason::FrontierExhausted;
            };

            let candidates: SmallVec<[Coord2; 4]> = Direction::ALL
                .into_iter()
                .filter_map(|direction| grid.neighbor(coords, direction))
                .filter(|&pos| Self::is_valid_target(grid, pos))
                .collect();

            if candidates.is_empty() {
                // the grid only grows, so this cell can never expand again
                frontier.remove(index);
                continue;
            }

            let next = candidates[rng.random_range(0..candidates.len())];
            grid.set(next, RoomType::Corridor);
            frontier.push(next);
            placed += 1;
        };

        let report = ExpansionReport {
            requested: target_count,
            placed,
            limit,
            stop,
        };
        if report.is_partial() {
            log::warn!(
                "Expansion stopped early ({:?}), requested {} but placed {}",
                stop,
                target_count,
                placed
            );
        } else {
            log::debug!("Expansion placed {} cells", placed);
        }
        Ok(report)
    }

    /// Whether a corridor may be placed at `coords`: strictly inside the
    /// border, currently empty, and not the last missing corner of a 2x2 block.
    pub fn is_valid_target(grid: &Grid, coords: Coord2) -> bool {
        grid.is_interior(coords)
            && grid.get(coords) == Some(RoomType::Empty)
            && !Self::completes_square(grid, coords)
    }

    fn completes_square(grid: &Grid, coords: Coord2) -> bool {
        DIAGONALS.into_iter().any(|(d_row, d_col)| {
            grid.is_occupied_at(coords, (d_row, 0))
                && grid.is_occupied_at(coords, (0, d_col))
                && grid.is_occupied_at(coords, (d_row, d_col))
        })
    }
}
