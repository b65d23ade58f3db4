use serde::{Deserialize, Serialize};

use crate::*;

/// Divisor used for missing or non-positive `count_divisor` values. Large
/// enough that `pool / divisor` is zero for any grid this crate can build.
pub const DEFAULT_COUNT_DIVISOR: u32 = CellCount::MAX as u32 + 1;

/// Raw per-room settings as they arrive from configuration. Values are not
/// trusted; see [`SettingsEntry::resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsEntry {
    pub spawn_chance_percent: i32,
    pub count_divisor: i32,
    pub max_count: i32,
}

/// Sanitised settings the generators work with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSettings {
    pub spawn_chance_percent: u8,
    pub count_divisor: u32,
    pub max_count: u32,
}

impl ResolvedSettings {
    pub const SUPPRESSED: Self = Self {
        spawn_chance_percent: 0,
        count_divisor: DEFAULT_COUNT_DIVISOR,
        max_count: 0,
    };

    /// Number of rooms this type may claim from a pool of `pool_size` cells.
    pub fn budget(&self, pool_size: usize) -> usize {
        let share = pool_size / self.count_divisor.max(1) as usize;
        share.min(self.max_count as usize)
    }
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self::SUPPRESSED
    }
}

impl SettingsEntry {
    pub const fn new(spawn_chance_percent: i32, count_divisor: i32, max_count: i32) -> Self {
        Self {
            spawn_chance_percent,
            count_divisor,
            max_count,
        }
    }

    pub fn resolve(&self, room: RoomType) -> ResolvedSettings {
        let spawn_chance_percent = match self.spawn_chance_percent {
            chance @ 0..=100 => chance as u8,
            chance => {
                log::warn!("{room:?}: spawn chance {chance}% out of range, clamped");
                chance.clamp(0, 100) as u8
            }
        };
        let count_divisor = match u32::try_from(self.count_divisor) {
            Ok(divisor) if divisor > 0 => divisor,
            _ => {
                log::warn!(
                    "{room:?}: count divisor {} is not positive, room type suppressed",
                    self.count_divisor
                );
                DEFAULT_COUNT_DIVISOR
            }
        };
        let max_count = u32::try_from(self.max_count).unwrap_or_else(|_| {
            log::warn!("{room:?}: negative max count {}, using 0", self.max_count);
            0
        });
        ResolvedSettings {
            spawn_chance_percent,
            count_divisor,
            max_count,
        }
    }
}

/// Source of per-room settings. The configuration layer that backs it lives
/// outside this crate.
pub trait SettingsResolver {
    fn entry(&self, room: RoomType) -> Option<SettingsEntry>;

    /// Never fails: missing entries come back suppressed.
    fn resolve(&self, room: RoomType) -> ResolvedSettings {
        match self.entry(room) {
            Some(entry) => entry.resolve(room),
            None => ResolvedSettings::SUPPRESSED,
        }
    }
}

/// Typed settings table, one optional entry per configurable room type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "RoomSettings::empty")]
pub struct RoomSettings {
    pub plain_room: Option<SettingsEntry>,
    pub enemy_room: Option<SettingsEntry>,
    pub difficult_enemy_room: Option<SettingsEntry>,
    pub shop: Option<SettingsEntry>,
    pub smithy: Option<SettingsEntry>,
    pub treasure_room: Option<SettingsEntry>,
    pub shrine: Option<SettingsEntry>,
    pub boss_room: Option<SettingsEntry>,
}

impl RoomSettings {
    /// No entries at all; every room type resolves to suppressed.
    pub const fn empty() -> Self {
        Self {
            plain_room: None,
            enemy_room: None,
            difficult_enemy_room: None,
            shop: None,
            smithy: None,
            treasure_room: None,
            shrine: None,
            boss_room: None,
        }
    }

    fn slot_mut(&mut self, room: RoomType) -> Option<&mut Option<SettingsEntry>> {
        use RoomType::*;
        match room {
            PlainRoom => Some(&mut self.plain_room),
            EnemyRoom => Some(&mut self.enemy_room),
            DifficultEnemyRoom => Some(&mut self.difficult_enemy_room),
            Shop => Some(&mut self.shop),
            Smithy => Some(&mut self.smithy),
            TreasureRoom => Some(&mut self.treasure_room),
            Shrine => Some(&mut self.shrine),
            BossRoom => Some(&mut self.boss_room),
            Empty | Corridor | Start => None,
        }
    }

    /// Returns `false` for room types that take no settings.
    pub fn set(&mut self, room: RoomType, entry: SettingsEntry) -> bool {
        match self.slot_mut(room) {
            Some(slot) => {
                *slot = Some(entry);
                true
            }
            None => false,
        }
    }

    pub fn with(mut self, room: RoomType, entry: SettingsEntry) -> Self {
        self.set(room, entry);
        self
    }
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            plain_room: Some(SettingsEntry::new(100, 1, i32::MAX)),
            enemy_room: Some(SettingsEntry::new(40, 1, i32::MAX)),
            difficult_enemy_room: Some(SettingsEntry::new(0, 8, 4)),
            shop: Some(SettingsEntry::new(0, 20, 1)),
            smithy: Some(SettingsEntry::new(0, 16, 1)),
            treasure_room: Some(SettingsEntry::new(0, 10, 3)),
            shrine: Some(SettingsEntry::new(0, 18, 2)),
            boss_room: Some(SettingsEntry::new(0, 12, 1)),
        }
    }
}

impl SettingsResolver for RoomSettings {
    fn entry(&self, room: RoomType) -> Option<SettingsEntry> {
        use RoomType::*;
        match room {
            PlainRoom => self.plain_room,
            EnemyRoom => self.enemy_room,
            DifficultEnemyRoom => self.difficult_enemy_room,
            Shop => self.shop,
            Smithy => self.smithy,
            TreasureRoom => self.treasure_room,
            Shrine => self.shrine,
            BossRoom => self.boss_room,
            Empty | Corridor | Start => None,
        }
    }
}

impl<T: SettingsResolver + ?Sized> SettingsResolver for &T {
    fn entry(&self, room: RoomType) -> Option<SettingsEntry> {
        (**self).entry(room)
    }
}
