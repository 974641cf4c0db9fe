//! Item-related state types.
//!
//! [`ItemStack`] is the quantity-bearing inventory record; [`MapItem`] is a
//! stack lying on the overworld with an optional expiry.

use super::{ItemId, Millis, StackId, WorldPos};

/// Broad item classification. Drives stacking, equip slots, and trade rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon,
    Armor,
    Miscellaneous,
    Resource,
    Quest,
}

impl ItemKind {
    /// Resources and miscellaneous goods merge by [`ItemId`]; weapons, armor,
    /// and quest items always occupy their own stack of quantity 1.
    pub fn is_stackable(self) -> bool {
        matches!(self, ItemKind::Miscellaneous | ItemKind::Resource)
    }

    pub fn is_equippable(self) -> bool {
        matches!(self, ItemKind::Weapon | ItemKind::Armor)
    }
}

/// Effect invoked by the "use" action on a consumable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseDirective {
    /// Heal every roster character by the given amount, capped at their max.
    HealSquad(u32),
}

/// One physical stack of an item.
///
/// Carries a denormalized copy of the template's display and stat fields so
/// equipped gear and saved inventories stay self-describing without a catalog
/// lookup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub stack_id: StackId,
    pub item: ItemId,
    pub kind: ItemKind,
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Always >= 1; a stack that would reach 0 is removed instead.
    pub quantity: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub price: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_directive: Option<UseDirective>,
}

impl ItemStack {
    pub fn is_stackable(&self) -> bool {
        self.kind.is_stackable()
    }
}

/// A stack lying on the overworld map.
///
/// Created by the tick spawner or a player drop; destroyed on pickup or when
/// the expiry sweep passes `expires_at`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapItem {
    pub stack: ItemStack,
    pub position: WorldPos,
    #[cfg_attr(feature = "serde", serde(default))]
    pub expires_at: Option<Millis>,
}

impl MapItem {
    pub fn is_expired(&self, now: Millis) -> bool {
        self.expires_at.is_some_and(|at| now > at)
    }
}
