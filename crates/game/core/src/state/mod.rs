//! Authoritative session state.
//!
//! [`SessionState`] is the single owned context for one playthrough: the
//! scheduler holds one handle and every tick, combat step, and player action
//! mutates state through it. There are no shadow copies.

pub mod types;

pub use types::{
    Character, Faction, FactionAiState, FactionId, GridPos, ItemId, ItemKind, ItemStack,
    MainQuestState, MapItem, Millis, Quest, QuestStatus, StackId, StackIds, UseDirective, WorldPos,
};

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::combat::CombatEngine;
use crate::config::GameConfig;
use crate::error::ActionError;
use crate::inventory::Inventory;
use crate::log::EventLog;
use crate::rng::SessionRng;

/// Which layer currently owns the player's attention. The world tick only
/// runs in [`Mode::Map`]; a city or combat transition short-circuits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Splash,
    Map,
    Inventory,
    City,
    Combat,
}

/// Complete mutable state of one playthrough.
#[derive(Debug)]
pub struct SessionState {
    pub mode: Mode,

    /// Stack-id allocator shared by every item container in the session.
    pub stack_ids: StackIds,
    pub inventory: Inventory,
    pub roster: Vec<Character>,
    pub active_character: usize,
    pub silver: u32,

    pub player_position: WorldPos,
    pub map_items: Vec<MapItem>,
    /// Map item the player is walking toward; collected on arrival.
    pub pickup_target: Option<StackId>,
    pub factions: Vec<Faction>,
    /// Absolute time of the last generic loot spawn.
    pub last_loot_spawn: Millis,

    pub current_city: Option<String>,
    pub merchant_stocks: BTreeMap<String, Inventory>,

    pub quests: Vec<Quest>,
    pub main_quest: MainQuestState,
    pub next_quest_serial: u64,

    pub combat: Option<CombatEngine>,
    pub active_combat_faction: Option<FactionId>,

    pub log: EventLog,
}

impl SessionState {
    /// Fresh new-game state: a squad of five armed with starter daggers, an
    /// empty bag, full faction pool, rolled merchant stocks.
    pub fn new_game(catalog: &Catalog, rng: &mut SessionRng) -> Self {
        let mut stack_ids = StackIds::new();

        let dagger = catalog.template(GameConfig::STARTER_WEAPON);
        let roster = (0..GameConfig::SQUAD_SIZE)
            .map(|_| {
                let mut character = Character::at_level(0);
                character.weapon = dagger.map(|t| t.instantiate(&mut stack_ids, 1));
                character
            })
            .collect();

        let factions = (0..GameConfig::FACTION_COUNT)
            .map(|i| {
                let template = rng
                    .pick(&catalog.faction_templates)
                    .copied()
                    .unwrap_or(crate::catalog::FactionTemplate {
                        name: "Wasteland Drifters",
                        icon: "💀",
                        color: "#78716c",
                    });
                Faction::generate(FactionId(i as u32), &template, rng)
            })
            .collect();

        let merchant_stocks = catalog
            .cities
            .iter()
            .map(|city| {
                let stock = crate::economy::roll_merchant_stock(catalog, rng, &mut stack_ids);
                (city.id.to_string(), stock)
            })
            .collect();

        Self {
            mode: Mode::Splash,
            stack_ids,
            inventory: Inventory::new(),
            roster,
            active_character: 0,
            silver: GameConfig::STARTING_SILVER,
            player_position: GameConfig::PLAYER_START,
            map_items: Vec::new(),
            pickup_target: None,
            factions,
            last_loot_spawn: Millis::ZERO,
            current_city: None,
            merchant_stocks,
            quests: Vec::new(),
            main_quest: MainQuestState::NotStarted,
            next_quest_serial: 0,
            combat: None,
            active_combat_faction: None,
            log: EventLog::new(),
        }
    }

    /// Full reset to new-game defaults. Used by both "new game" and the
    /// game-over path after a squad wipe.
    pub fn reset(&mut self, catalog: &Catalog, rng: &mut SessionRng) {
        *self = Self::new_game(catalog, rng);
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.log.push(message);
    }

    pub fn active_character(&self) -> &Character {
        &self.roster[self.active_character]
    }

    // ===== overworld movement & pickups =====

    /// Moves the player and collects the targeted map item once within
    /// pickup range.
    pub fn move_player(&mut self, position: WorldPos) {
        self.player_position = position;
        let Some(target) = self.pickup_target else {
            return;
        };
        let Some(index) = self.map_items.iter().position(|m| m.stack.stack_id == target) else {
            self.pickup_target = None;
            return;
        };
        if self.player_position.distance_to(self.map_items[index].position)
            < GameConfig::PICKUP_DISTANCE
        {
            let item = self.map_items.remove(index);
            self.pickup_target = None;
            self.log(format!(
                "You picked up: {} (x{})",
                item.stack.name, item.stack.quantity
            ));
            self.inventory.absorb(item.stack);
        }
    }

    pub fn set_pickup_target(&mut self, target: Option<StackId>) {
        self.pickup_target = target;
    }

    /// Drops an inventory stack onto the map near the player's feet.
    pub fn drop_item(&mut self, stack: StackId, rng: &mut SessionRng) -> Result<(), ActionError> {
        let stack = self
            .inventory
            .remove_stack(stack)
            .ok_or(ActionError::StackNotFound)?;
        let jitter = |rng: &mut SessionRng| rng.range_f32(-1.0, 1.0);
        let position = WorldPos::new(
            self.player_position.x + jitter(rng),
            self.player_position.y + jitter(rng),
        )
        .clamped(GameConfig::MAP_WIDTH, GameConfig::MAP_HEIGHT);
        self.log(format!("Dropped: {} (x{})", stack.name, stack.quantity));
        self.map_items.push(MapItem {
            stack,
            position,
            expires_at: None,
        });
        Ok(())
    }

    // ===== equipment =====

    /// Equips a weapon or armor stack from the inventory onto the active
    /// character. A previously equipped item returns to the inventory in the
    /// same swap; there is no intermediate state.
    pub fn equip(&mut self, stack: StackId) -> Result<(), ActionError> {
        let kind = self
            .inventory
            .get(stack)
            .map(|s| s.kind)
            .ok_or(ActionError::StackNotFound)?;
        if !kind.is_equippable() {
            return Err(ActionError::NotEquippable);
        }
        let item = self
            .inventory
            .remove_stack(stack)
            .ok_or(ActionError::StackNotFound)?;
        let character = &mut self.roster[self.active_character];
        let slot = match kind {
            ItemKind::Weapon => &mut character.weapon,
            ItemKind::Armor => &mut character.armor,
            _ => unreachable!("checked equippable above"),
        };
        let previous = slot.replace(item);
        if let Some(previous) = previous {
            self.inventory.insert_stack(previous);
        }
        Ok(())
    }

    pub fn unequip_weapon(&mut self) -> Result<(), ActionError> {
        let character = &mut self.roster[self.active_character];
        let item = character.weapon.take().ok_or(ActionError::SlotEmpty)?;
        self.inventory.insert_stack(item);
        Ok(())
    }

    pub fn unequip_armor(&mut self) -> Result<(), ActionError> {
        let character = &mut self.roster[self.active_character];
        let item = character.armor.take().ok_or(ActionError::SlotEmpty)?;
        self.inventory.insert_stack(item);
        Ok(())
    }

    // ===== consumables =====

    /// Invokes a stack's use directive: squad-wide healing consumes one unit
    /// of the stack.
    pub fn use_item(&mut self, stack: StackId) -> Result<(), ActionError> {
        let directive = self
            .inventory
            .get(stack)
            .ok_or(ActionError::StackNotFound)?
            .use_directive
            .ok_or(ActionError::NotUsable)?;
        match directive {
            UseDirective::HealSquad(amount) => {
                for character in &mut self.roster {
                    character.heal(amount);
                }
            }
        }
        self.inventory.consume_one(stack);
        Ok(())
    }

    // ===== roster management =====

    pub fn next_character(&mut self) {
        self.active_character = (self.active_character + 1) % self.roster.len();
    }

    pub fn prev_character(&mut self) {
        self.active_character =
            (self.active_character + self.roster.len() - 1) % self.roster.len();
    }

    /// Removes a roster character, returning their gear to the inventory.
    /// The last character cannot be removed.
    pub fn remove_character(&mut self, index: usize) -> Result<(), ActionError> {
        if self.roster.len() <= 1 {
            return Err(ActionError::LastCharacter);
        }
        if index >= self.roster.len() {
            return Err(ActionError::NoSuchCharacter);
        }
        let character = self.roster.remove(index);
        if let Some(weapon) = character.weapon {
            self.inventory.insert_stack(weapon);
        }
        if let Some(armor) = character.armor {
            self.inventory.insert_stack(armor);
        }
        if self.active_character >= index {
            self.active_character = self.active_character.saturating_sub(1);
        }
        Ok(())
    }
}
