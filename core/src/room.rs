use serde::{Deserialize, Serialize};

/// Semantic type of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Un-generated, non-traversable space.
    Empty,
    /// Generated but not yet classified. Never present in a finished dungeon.
    Corridor,
    Start,
    PlainRoom,
    EnemyRoom,
    DifficultEnemyRoom,
    Shop,
    Smithy,
    TreasureRoom,
    Shrine,
    BossRoom,
}

/// Rarity tiers, rarest first. Classification hands out the shuffled pool in
/// this order so rarer rooms get first claim.
pub const RARITY_TIERS: [RoomType; 6] = [
    RoomType::BossRoom,
    RoomType::Shop,
    RoomType::Shrine,
    RoomType::TreasureRoom,
    RoomType::Smithy,
    RoomType::DifficultEnemyRoom,
];

impl RoomType {
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Rooms that start a fight when entered.
    pub const fn is_hostile(self) -> bool {
        matches!(
            self,
            Self::EnemyRoom | Self::DifficultEnemyRoom | Self::BossRoom
        )
    }

    pub const fn is_rarity_tier(self) -> bool {
        matches!(
            self,
            Self::BossRoom
                | Self::Shop
                | Self::Shrine
                | Self::TreasureRoom
                | Self::Smithy
                | Self::DifficultEnemyRoom
        )
    }

    /// Whether the player can stand next to the start on this kind of cell.
    pub const fn is_safe_zone(self) -> bool {
        matches!(self, Self::Empty | Self::Start | Self::PlainRoom)
    }
}

impl Default for RoomType {
    fn default() -> Self {
        Self::Empty
    }
}
