//! Foundational state types shared across the simulation.

mod character;
mod common;
mod faction;
mod item;
mod quest;

pub use character::Character;
pub use common::{FactionId, GridPos, ItemId, Millis, StackId, StackIds, WorldPos};
pub use faction::{Faction, FactionAiState};
pub use item::{ItemKind, ItemStack, MapItem, UseDirective};
pub use quest::{MainQuestState, Quest, QuestStatus};
