//! The flat save snapshot and its restore path.
//!
//! Loading tolerates snapshots written by older builds: optional sections
//! fall back to freshly generated defaults, health invariants are
//! re-established, and a find-phase save missing its main-quest ledger entry
//! gets the entry re-inserted. A payload missing any REQUIRED field fails
//! deserialization wholesale and is treated as "no save" by the stores.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wastes_core::{
    Catalog, Character, Faction, FactionId, GameConfig, Inventory, ItemStack, MainQuestState,
    MapItem, Millis, Mode, Quest, SessionRng, SessionState, StackIds, WorldPos, main_quest_entry,
};

fn default_silver() -> u32 {
    GameConfig::STARTING_SILVER
}

/// One complete persisted snapshot of a session.
///
/// `inventory`, `roster`, `active_character`, `map_items`, and
/// `player_position` are required; everything else defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveData {
    pub inventory: Vec<ItemStack>,
    pub roster: Vec<Character>,
    pub active_character: usize,
    pub map_items: Vec<MapItem>,
    pub player_position: WorldPos,
    #[serde(default)]
    pub factions: Vec<Faction>,
    #[serde(default)]
    pub log: Vec<String>,
    #[serde(default = "default_silver")]
    pub silver: u32,
    #[serde(default)]
    pub merchants: BTreeMap<String, Vec<ItemStack>>,
    #[serde(default)]
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub main_quest: MainQuestState,
    #[serde(default)]
    pub next_quest_serial: u64,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SaveData {
    /// Captures the persistent slice of a session. Transient pieces (combat,
    /// pickup target, spawn timer) are intentionally not saved.
    pub fn capture(state: &SessionState) -> Self {
        Self {
            inventory: state.inventory.iter().cloned().collect(),
            roster: state.roster.clone(),
            active_character: state.active_character,
            map_items: state.map_items.clone(),
            player_position: state.player_position,
            factions: state.factions.clone(),
            log: state.log.to_vec(),
            silver: state.silver,
            merchants: state
                .merchant_stocks
                .iter()
                .map(|(city, stock)| (city.clone(), stock.iter().cloned().collect()))
                .collect(),
            quests: state.quests.clone(),
            main_quest: state.main_quest,
            next_quest_serial: state.next_quest_serial,
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuilds a live session from the snapshot, substituting defaults for
    /// anything an older save lacks.
    pub fn restore(self, catalog: &Catalog, rng: &mut SessionRng) -> SessionState {
        let mut state = SessionState::new_game(catalog, rng);

        let mut highest_stack_id = 0u64;
        let mut observe = |stack: &ItemStack| {
            highest_stack_id = highest_stack_id.max(stack.stack_id.0);
        };
        for stack in &self.inventory {
            observe(stack);
        }
        for item in &self.map_items {
            observe(&item.stack);
        }
        for stacks in self.merchants.values() {
            for stack in stacks {
                observe(stack);
            }
        }
        for character in &self.roster {
            if let Some(weapon) = &character.weapon {
                observe(weapon);
            }
            if let Some(armor) = &character.armor {
                observe(armor);
            }
        }

        state.stack_ids = StackIds::resume_after(highest_stack_id);
        state.inventory = Inventory::from_stacks(self.inventory);

        // An empty roster would leave the session without an actor; fall
        // back to the default squad instead.
        if !self.roster.is_empty() {
            state.roster = self.roster;
            for character in &mut state.roster {
                character.normalize();
            }
        }
        state.active_character = self.active_character.min(state.roster.len() - 1);

        state.map_items = self.map_items;
        state.player_position = self.player_position;

        if !self.factions.is_empty() {
            state.factions = self.factions;
            for (index, faction) in state.factions.iter_mut().enumerate() {
                // Ids must stay unique; re-number saves from builds that
                // did not persist them distinctly.
                faction.id = FactionId(index as u32);
            }
        }

        state.log = wastes_core::EventLog::from_messages(self.log);
        state.silver = self.silver;

        if !self.merchants.is_empty() {
            state.merchant_stocks = self
                .merchants
                .into_iter()
                .map(|(city, stacks)| (city, Inventory::from_stacks(stacks)))
                .collect();
        }

        state.quests = self.quests;
        state.main_quest = self.main_quest;
        state.next_quest_serial = self.next_quest_serial;
        if state.main_quest == MainQuestState::FindChip
            && !state.quests.iter().any(|q| q.id == GameConfig::MAIN_QUEST_ID)
        {
            state.quests.push(main_quest_entry(catalog));
        }

        state.pickup_target = None;
        state.combat = None;
        state.active_combat_faction = None;
        state.last_loot_spawn = Millis::ZERO;
        state.mode = Mode::Map;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wastes_core::ItemId;

    fn catalog() -> Catalog {
        wastes_content::default_catalog()
    }

    fn live_session() -> (SessionState, Catalog, SessionRng) {
        let catalog = catalog();
        let mut rng = SessionRng::from_seed(4);
        let mut state = SessionState::new_game(&catalog, &mut rng);
        state.begin_main_quest(&catalog);
        let ore = catalog.template(ItemId(15)).unwrap();
        state
            .inventory
            .add_from_template(&mut state.stack_ids, ore, 12);
        state.silver = 432;
        state.log("a memorable event");
        (state, catalog, rng)
    }

    #[test]
    fn capture_restore_round_trips_the_persistent_slice() {
        let (state, catalog, mut rng) = live_session();
        let data = SaveData::capture(&state);
        let json = serde_json::to_string(&data).unwrap();
        let parsed: SaveData = serde_json::from_str(&json).unwrap();
        let restored = parsed.restore(&catalog, &mut rng);

        assert_eq!(restored.silver, 432);
        assert_eq!(restored.inventory.total_quantity(ItemId(15)), 12);
        assert_eq!(restored.roster, state.roster);
        assert_eq!(restored.main_quest, MainQuestState::FindChip);
        assert_eq!(restored.quests.len(), state.quests.len());
        assert_eq!(restored.player_position, state.player_position);
        assert!(restored.log.iter().any(|m| m == "a memorable event"));
        assert_eq!(restored.mode, Mode::Map);
        assert!(restored.combat.is_none());
    }

    #[test]
    fn restored_allocator_never_reissues_a_loaded_id() {
        let (state, catalog, mut rng) = live_session();
        let data = SaveData::capture(&state);
        let mut restored = data.restore(&catalog, &mut rng);

        let mut seen: Vec<u64> = restored
            .inventory
            .iter()
            .map(|s| s.stack_id.0)
            .chain(
                restored
                    .roster
                    .iter()
                    .flat_map(|c| c.weapon.iter().map(|w| w.stack_id.0)),
            )
            .chain(
                restored
                    .merchant_stocks
                    .values()
                    .flat_map(|stock| stock.iter().map(|s| s.stack_id.0)),
            )
            .collect();
        let fresh = restored.stack_ids.allocate();
        seen.sort_unstable();
        assert!(!seen.contains(&fresh.0));
    }

    #[test]
    fn minimal_legacy_snapshot_gets_defaults() {
        let catalog = catalog();
        let mut rng = SessionRng::from_seed(8);
        // Only the required fields, as an old save might carry.
        let json = r#"{
            "inventory": [],
            "roster": [
                { "weapon": null, "armor": null, "level": 3, "xp": 100,
                  "max_health": 0, "current_health": 0 }
            ],
            "active_character": 5,
            "map_items": [],
            "player_position": { "x": 10.0, "y": 20.0 }
        }"#;
        let data: SaveData = serde_json::from_str(json).unwrap();
        let state = data.restore(&catalog, &mut rng);

        assert_eq!(state.silver, GameConfig::STARTING_SILVER);
        assert_eq!(state.factions.len(), GameConfig::FACTION_COUNT);
        assert_eq!(state.merchant_stocks.len(), catalog.cities.len());
        assert!(state.quests.is_empty());
        assert_eq!(state.main_quest, MainQuestState::NotStarted);
        // Health floors recomputed from the level.
        assert_eq!(state.roster[0].max_health, GameConfig::max_health_for_level(3));
        assert_eq!(state.roster[0].current_health, state.roster[0].max_health);
        // Out-of-range index clamped.
        assert_eq!(state.active_character, 0);
    }

    #[test]
    fn find_phase_snapshot_reinserts_the_main_quest_entry() {
        let catalog = catalog();
        let mut rng = SessionRng::from_seed(8);
        let json = r#"{
            "inventory": [],
            "roster": [
                { "weapon": null, "armor": null, "level": 0, "xp": 0,
                  "max_health": 12, "current_health": 12 }
            ],
            "active_character": 0,
            "map_items": [],
            "player_position": { "x": 100.0, "y": 100.0 },
            "main_quest": "FindChip"
        }"#;
        let data: SaveData = serde_json::from_str(json).unwrap();
        let state = data.restore(&catalog, &mut rng);
        assert!(state.quests.iter().any(|q| q.id == GameConfig::MAIN_QUEST_ID));
    }

    #[test]
    fn missing_required_field_fails_deserialization() {
        // No roster: the payload is rejected wholesale, never half-applied.
        let json = r#"{
            "inventory": [],
            "active_character": 0,
            "map_items": [],
            "player_position": { "x": 1.0, "y": 1.0 }
        }"#;
        assert!(serde_json::from_str::<SaveData>(json).is_err());
    }
}
