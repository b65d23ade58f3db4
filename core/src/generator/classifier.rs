use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPlacement {
    pub room: RoomType,
    /// Unclaimed general cells when this tier was processed.
    pub pool_size: CellCount,
    pub budget: CellCount,
    pub placed: CellCount,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Corridor cells touching the start, all turned into plain rooms.
    pub adjacent: CellCount,
    /// Corridor cells open to every room type.
    pub general: CellCount,
    /// One entry per rarity tier, in processing order.
    pub tiers: Vec<TierPlacement>,
    pub enemy_rooms: CellCount,
    pub plain_rooms: CellCount,
}

impl ClassificationReport {
    pub fn tier(&self, room: RoomType) -> Option<&TierPlacement> {
        self.tiers.iter().find(|tier| tier.room == room)
    }
}

/// Assigns final room types to every corridor cell of an expanded grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomClassifier;

impl RoomClassifier {
    pub const fn new() -> Self {
        Self
    }

    pub fn run<S, R>(
        &self,
        grid: &mut Grid,
        start: Coord2,
        settings: &S,
        rng: &mut R,
    ) -> Result<ClassificationReport>
    where
        S: SettingsResolver + ?Sized,
        R: Rng + ?Sized,
    {
        if grid.get(start) != Some(RoomType::Start) {
            return Err(GenError::GridMismatch);
        }

        let (adjacent, mut general): (Vec<Coord2>, Vec<Coord2>) = grid
            .iter()
            .filter(|&(_, room)| room == RoomType::Corridor)
            .map(|(coords, _)| coords)
            .partition(|&coords| is_adjacent(coords, start));

        let mut report = ClassificationReport {
            adjacent: adjacent.len() as CellCount,
            general: general.len() as CellCount,
            ..Default::default()
        };
        log::debug!(
            "Classifying {} cells, {} next to start",
            adjacent.len() + general.len(),
            adjacent.len()
        );

        // placement order must not follow generation order or position
        general.shuffle(rng);

        for room in RARITY_TIERS {
            let pool_size = general.len();
            let budget = settings.resolve(room).budget(pool_size);
            let mut placed = 0;

            while placed < budget {
                let Some(coords) = general.pop() else {
                    break;
                };
                if grid.get(coords) == Some(RoomType::Corridor) {
                    grid.set(coords, room);
                    placed += 1;
                }
            }

            if placed < budget {
                log::warn!("{room:?}: placed {placed} of {budget}, pool ran out");
            } else {
                log::trace!("{room:?}: placed {placed} from pool of {pool_size}");
            }
            report.tiers.push(TierPlacement {
                room,
                pool_size: pool_size as CellCount,
                budget: budget as CellCount,
                placed: placed as CellCount,
            });
        }

        let enemy_chance = settings.resolve(RoomType::EnemyRoom).spawn_chance_percent;
        for &coords in &general {
            if grid.get(coords) != Some(RoomType::Corridor) {
                continue;
            }
            let roll: u8 = rng.random_range(0..100);
            if roll < enemy_chance {
                grid.set(coords, RoomType::EnemyRoom);
                report.enemy_rooms += 1;
            } else {
                grid.set(coords, RoomType::PlainRoom);
                report.plain_rooms += 1;
            }
        }

        for &coords in &adjacent {
            grid.set(coords, RoomType::PlainRoom);
            report.plain_rooms += 1;
        }

        grid.set(start, RoomType::Start);

        log::debug!(
            "Classified {} enemy and {} plain rooms",
            report.enemy_rooms,
            report.plain_rooms
        );
        Ok(report)
    }
}
