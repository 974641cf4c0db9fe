//! Map item expiry and the two overworld spawners.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::SessionRng;
use crate::state::{MainQuestState, MapItem, Millis, SessionState, WorldPos};

impl SessionState {
    /// Drops every map item whose expiry has passed.
    pub(super) fn sweep_expired_items(&mut self, now: Millis) {
        let mut expired = Vec::new();
        self.map_items.retain(|item| {
            if item.is_expired(now) {
                expired.push(item.stack.name.clone());
                false
            } else {
                true
            }
        });
        for name in expired {
            self.log(format!("The {name} vanished."));
        }
    }

    /// While the main quest is in its find phase, a very low per-tick roll
    /// may spawn the purifier chip — but only if no copy exists anywhere
    /// (world or inventory).
    pub(super) fn roll_quest_item_spawn(
        &mut self,
        catalog: &Catalog,
        rng: &mut SessionRng,
        now: Millis,
    ) {
        if self.main_quest != MainQuestState::FindChip {
            return;
        }
        let chip = GameConfig::MAIN_QUEST_ITEM;
        let exists = self.map_items.iter().any(|m| m.stack.item == chip)
            || self.inventory.contains_item(chip);
        if exists || !rng.chance(GameConfig::QUEST_SPAWN_CHANCE) {
            return;
        }
        let Some(template) = catalog.template(chip) else {
            return;
        };
        let stack = template.instantiate(&mut self.stack_ids, 1);
        self.map_items.push(MapItem {
            stack,
            position: random_spawn_position(rng),
            expires_at: Some(now + GameConfig::QUEST_ITEM_TTL_MS),
        });
        self.log("Something glinted on the horizon...");
    }

    /// Spawns one item from the small loot table when the spawn interval has
    /// elapsed and no timed item is currently on the map.
    pub(super) fn roll_loot_spawn(&mut self, catalog: &Catalog, rng: &mut SessionRng, now: Millis) {
        if now.0.saturating_sub(self.last_loot_spawn.0) <= GameConfig::LOOT_SPAWN_INTERVAL_MS {
            return;
        }
        if self.map_items.iter().any(|m| m.expires_at.is_some()) {
            self.last_loot_spawn = now;
            return;
        }
        let Some(template) = rng
            .pick(&catalog.loot_table)
            .copied()
            .and_then(|id| catalog.template(id))
        else {
            return;
        };
        let stack = template.instantiate(&mut self.stack_ids, 1);
        self.log(format!("An item appeared in the wastes: {}!", stack.name));
        self.map_items.push(MapItem {
            stack,
            position: random_spawn_position(rng),
            expires_at: Some(now + GameConfig::LOOT_ITEM_TTL_MS),
        });
        self.last_loot_spawn = now;
    }
}

fn random_spawn_position(rng: &mut SessionRng) -> WorldPos {
    let margin = GameConfig::SPAWN_EDGE_MARGIN;
    WorldPos::new(
        rng.range_f32(margin, GameConfig::MAP_WIDTH - margin),
        rng.range_f32(margin, GameConfig::MAP_HEIGHT - margin),
    )
}
