use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

/// Runs expansion and classification back to back on a single `ChaCha8Rng`
/// stream, so a seed reproduces the same dungeon on every platform.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededDungeonGenerator {
    seed: u64,
    start: Option<Coord2>,
}

impl SeededDungeonGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed, start: None }
    }

    /// Overrides the default center start.
    pub fn with_start(mut self, start: Coord2) -> Self {
        self.start = Some(start);
        self
    }
}

impl DungeonGenerator for SeededDungeonGenerator {
    fn generate<S: SettingsResolver + ?Sized>(
        self,
        config: LayoutConfig,
        settings: &S,
    ) -> Result<Dungeon> {
        let (height, width) = config.size;
        let start = self.start.unwrap_or_else(|| config.start());
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut grid = Grid::new(height, width)?;

        log::debug!("Generating {:?} dungeon with seed {}", config.size, self.seed);

        let expansion = ExpansionGenerator::new(config.density_ceiling).run(
            &mut grid,
            start,
            config.target_rooms,
            &mut rng,
        )?;
        let classification = RoomClassifier::new().run(&mut grid, start, settings, &mut rng)?;

        Ok(Dungeon::new(grid, start, self.seed, expansion, classification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn generate(seed: u64, config: LayoutConfig, settings: &RoomSettings) -> Dungeon {
        SeededDungeonGenerator::new(seed)
            .generate(config, settings)
            .unwrap()
    }

    #[test]
    fn same_seed_same_dungeon() {
        let config = LayoutConfig::new((16, 24), 80);
        let settings = RoomSettings::default();

        for seed in 0..16 {
            assert_eq!(
                generate(seed, config, &settings),
                generate(seed, config, &settings),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let config = LayoutConfig::new((16, 24), 80);
        let settings = RoomSettings::default();

        let first = generate(1, config, &settings);
        let second = generate(2, config, &settings);

        assert_ne!(first.grid(), second.grid());
    }

    #[test]
    fn finished_dungeons_hold_all_invariants() {
        let config = LayoutConfig::new((14, 18), 90);
        let settings = RoomSettings::default();

        for seed in 0..64 {
            let dungeon = generate(seed, config, &settings);
            let grid = dungeon.grid();
            let start = dungeon.start();

            assert_eq!(grid.count(RoomType::Corridor), 0, "seed {seed}");
            assert_eq!(grid.count(RoomType::Start), 1, "seed {seed}");
            assert_eq!(grid[start], RoomType::Start, "seed {seed}");
            assert!(
                dungeon
                    .safe_zone()
                    .all(|pos| grid[pos].is_safe_zone()),
                "seed {seed}"
            );
            assert!(
                dungeon.safe_zone().all(|pos| !grid[pos].is_hostile()),
                "seed {seed}"
            );
            assert!(border_is_empty(grid), "seed {seed}");
            assert!(!has_full_square(grid), "seed {seed}");
            assert!(is_connected(grid, start), "seed {seed}");
            assert_eq!(
                grid.occupied_count(),
                dungeon.expansion().placed,
                "seed {seed}"
            );

            for tier in &dungeon.classification().tiers {
                let resolved = settings.resolve(tier.room);
                assert_eq!(grid.count(tier.room), tier.placed, "seed {seed}");
                assert!(tier.placed <= tier.budget, "seed {seed}");
                assert!(u32::from(tier.placed) <= resolved.max_count, "seed {seed}");
                assert!(
                    u32::from(tier.placed) <= u32::from(tier.pool_size) / resolved.count_divisor,
                    "seed {seed}"
                );
            }
        }
    }

    #[test]
    fn all_enemy_scenario_on_ten_by_ten() {
        let config = LayoutConfig::new((10, 10), 20);
        let settings =
            RoomSettings::empty().with(RoomType::EnemyRoom, SettingsEntry::new(100, 1, 0));

        let dungeon = generate(42, config, &settings);
        let grid = dungeon.grid();
        let start = dungeon.start();

        for (coords, room) in grid.iter() {
            match room {
                RoomType::Empty | RoomType::Start => {}
                RoomType::PlainRoom => assert!(is_adjacent(coords, start)),
                RoomType::EnemyRoom => assert!(!is_adjacent(coords, start)),
                other => panic!("unexpected {other:?} at {coords:?}"),
            }
        }
        assert!(dungeon.expansion().placed <= 20);
        assert_eq!(grid.occupied_count(), dungeon.expansion().placed);
        assert_eq!(
            dungeon.count(RoomType::EnemyRoom),
            dungeon.classification().general
        );
    }

    #[test]
    fn zero_boss_divisor_places_no_boss() {
        let config = LayoutConfig::new((20, 20), 120);
        let settings =
            RoomSettings::default().with(RoomType::BossRoom, SettingsEntry::new(50, 0, 3));

        for seed in 0..8 {
            let dungeon = generate(seed, config, &settings);

            assert_eq!(dungeon.count(RoomType::BossRoom), 0);
        }
    }

    #[test]
    fn overfull_target_on_six_by_six_stops_early() {
        let config = LayoutConfig::new((6, 6), 36);
        let settings = RoomSettings::default();

        for seed in 0..16 {
            let dungeon = generate(seed, config, &settings);
            let expansion = dungeon.expansion();

            assert!(expansion.is_partial());
            assert!(expansion.placed < expansion.requested);
            assert!(border_is_empty(dungeon.grid()));
            assert!(is_connected(dungeon.grid(), dungeon.start()));
            assert_eq!(dungeon.grid().count(RoomType::Corridor), 0);
        }
    }

    #[test]
    fn explicit_start_is_honored() {
        let config = LayoutConfig::new((10, 10), 15);

        let dungeon = SeededDungeonGenerator::new(3)
            .with_start((2, 7))
            .generate(config, &RoomSettings::default())
            .unwrap();

        assert_eq!(dungeon.start(), (2, 7));
        assert_eq!(dungeon.room_at((2, 7)), Some(RoomType::Start));
    }

    #[test]
    fn border_start_is_an_error() {
        let config = LayoutConfig::new((10, 10), 15);

        let result = SeededDungeonGenerator::new(3)
            .with_start((0, 4))
            .generate(config, &RoomSettings::default());

        assert_eq!(result, Err(GenError::InvalidCoords));
    }
}
