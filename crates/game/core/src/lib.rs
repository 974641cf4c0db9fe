//! Deterministic simulation core for the wastes RPG.
//!
//! `wastes-core` defines the canonical rules: the item/inventory model,
//! character progression, the overworld tick with faction AI, the turn-based
//! combat resolver, and the economy/quest ledger. Everything is pure with
//! respect to time and randomness — callers pass in a [`state::Millis`]
//! timestamp and a seeded [`rng::SessionRng`] — so a whole session replays
//! deterministically from a seed. The runtime crate owns scheduling and
//! persistence on top of these APIs.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod economy;
pub mod error;
pub mod inventory;
pub mod log;
pub mod progression;
pub mod rng;
pub mod state;
pub mod world;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{Catalog, CityDef, FactionTemplate, ItemTemplate};
pub use combat::{
    CombatEngine, CombatError, CombatEvent, CombatPhase, CombatResult, CombatState, CombatSummary,
    CombatUnit, PlayerCommand, build_combat_state,
};
pub use config::GameConfig;
pub use economy::{QuestError, TradeError, main_quest_entry, roll_merchant_stock};
pub use error::ActionError;
pub use inventory::{Inventory, InventoryError};
pub use log::EventLog;
pub use rng::SessionRng;
pub use state::{
    Character, Faction, FactionAiState, FactionId, GridPos, ItemId, ItemKind, ItemStack,
    MainQuestState, MapItem, Millis, Mode, Quest, QuestStatus, SessionState, StackId, StackIds,
    UseDirective, WorldPos,
};
pub use world::TickOutcome;
