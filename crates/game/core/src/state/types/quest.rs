//! Quest ledger entries and the main-quest flag.

use super::ItemId;

/// Lifecycle of a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestStatus {
    Active,
    Completed,
}

/// A fetch quest held in the ledger. At most one active quest per
/// (city, giver) pair at a time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    pub id: String,
    pub giver_city_id: String,
    pub giver_name: String,
    pub city_name: String,
    pub item: ItemId,
    pub item_name: String,
    pub item_icon: String,
    pub required_quantity: u32,
    pub reward_silver: u32,
    pub description: String,
    pub status: QuestStatus,
}

/// Progress of the singleton main quest line. Distinct from the merchant
/// rotation: created by intro completion, turned in to a specific character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MainQuestState {
    #[default]
    NotStarted,
    /// The purifier chip must be found in the wastes.
    FindChip,
    Completed,
}
