use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Every occupied cell is reachable from `start` through orthogonal steps.
pub(crate) fn is_connected(grid: &Grid, start: Coord2) -> bool {
    let mut visited = BTreeSet::from([start]);
    let mut to_visit = VecDeque::from([start]);

    while let Some(coords) = to_visit.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = grid.neighbor(coords, direction) else {
                continue;
            };
            if grid.is_occupied(next) && visited.insert(next) {
                to_visit.push_back(next);
            }
        }
    }

    visited.len() == usize::from(grid.occupied_count())
}

pub(crate) fn border_is_empty(grid: &Grid) -> bool {
    grid.iter()
        .filter(|&(coords, _)| !grid.is_interior(coords))
        .all(|(_, room)| room == RoomType::Empty)
}

pub(crate) fn has_full_square(grid: &Grid) -> bool {
    let (height, width) = grid.size();
    (0..height.saturating_sub(1)).any(|row| {
        (0..width.saturating_sub(1)).any(|col| {
            [(row, col), (row + 1, col), (row, col + 1), (row + 1, col + 1)]
                .into_iter()
                .all(|pos| grid.is_occupied(pos))
        })
    })
}
