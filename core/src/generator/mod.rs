use crate::*;
pub use classifier::*;
pub use expansion::*;
pub use frontier::*;
pub use seeded::*;

mod classifier;
mod expansion;
mod frontier;
mod seeded;

pub trait DungeonGenerator {
    fn generate<S: SettingsResolver + ?Sized>(
        self,
        config: LayoutConfig,
        settings: &S,
    ) -> Result<Dungeon>;
}
