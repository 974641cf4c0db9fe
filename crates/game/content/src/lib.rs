//! Static game content: item catalogs, the city registry, and faction
//! flavor templates.
//!
//! The core defines the shapes ([`wastes_core::Catalog`] and friends); this
//! crate supplies the shipped data set. Everything is compiled in — there are
//! no asset files to load or fail on.

mod catalog;
mod cities;
mod factions;

use wastes_core::Catalog;

pub use catalog::{reward_pool, starter_items};
pub use cities::cities;
pub use factions::faction_templates;

/// The full shipped content set.
pub fn default_catalog() -> Catalog {
    Catalog {
        starter_items: starter_items(),
        reward_pool: reward_pool(),
        quest_item_pool: catalog::quest_item_pool(),
        loot_table: catalog::loot_table(),
        cities: cities(),
        faction_templates: faction_templates(),
    }
}
