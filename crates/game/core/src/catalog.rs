//! Static content definitions consumed read-only by the simulation.
//!
//! The core defines the shapes; the content crate supplies the data. Spawn,
//! reward, merchant, and quest-offer logic all draw from one [`Catalog`].

use crate::state::{ItemId, ItemKind, ItemStack, StackIds, UseDirective, WorldPos};

/// Blueprint for an item. Instantiated into [`ItemStack`]s on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTemplate {
    pub id: ItemId,
    pub name: &'static str,
    pub kind: ItemKind,
    pub icon: &'static str,
    pub description: &'static str,
    pub damage: Option<u32>,
    pub armor: Option<u32>,
    pub effect: Option<&'static str>,
    pub price: Option<u32>,
    pub use_directive: Option<UseDirective>,
    /// Quantity a freshly spawned stack carries.
    pub default_quantity: u32,
}

impl ItemTemplate {
    /// Instantiates a stack of the given quantity with a fresh stack id.
    pub fn instantiate(&self, ids: &mut StackIds, quantity: u32) -> ItemStack {
        ItemStack {
            stack_id: ids.allocate(),
            item: self.id,
            kind: self.kind,
            name: self.name.to_string(),
            icon: self.icon.to_string(),
            description: self.description.to_string(),
            quantity: quantity.max(1),
            damage: self.damage,
            armor: self.armor,
            effect: self.effect.map(str::to_string),
            price: self.price,
            use_directive: self.use_directive,
        }
    }
}

/// A settlement on the overworld: proximity trigger, merchant, quest giver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CityDef {
    pub id: &'static str,
    pub name: &'static str,
    pub merchant_name: &'static str,
    pub position: WorldPos,
    pub color: &'static str,
}

/// Name/appearance roll for a faction respawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FactionTemplate {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// All static content for one game: item pools, cities, faction flavors.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Items available at the very start (starter gear templates).
    pub starter_items: Vec<ItemTemplate>,
    /// Loot pool used by combat rewards, merchant stocks, and map spawns.
    pub reward_pool: Vec<ItemTemplate>,
    /// Item ids merchants may ask for in fetch quests.
    pub quest_item_pool: Vec<ItemId>,
    /// Item ids the generic overworld spawner may drop.
    pub loot_table: Vec<ItemId>,
    pub cities: Vec<CityDef>,
    pub faction_templates: Vec<FactionTemplate>,
}

impl Catalog {
    /// Looks up a template by id across the reward pool and starter items.
    pub fn template(&self, id: ItemId) -> Option<&ItemTemplate> {
        self.reward_pool
            .iter()
            .chain(self.starter_items.iter())
            .find(|t| t.id == id)
    }

    pub fn city(&self, id: &str) -> Option<&CityDef> {
        self.cities.iter().find(|c| c.id == id)
    }
}
