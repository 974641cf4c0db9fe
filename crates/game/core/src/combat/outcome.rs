//! Post-combat resolution against the persistent session state.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::SessionRng;
use crate::state::{ItemStack, Millis, Mode, SessionState};

use super::{CombatPhase, CombatResult};

/// What a finished combat produced, for the end-of-combat screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatSummary {
    pub result: CombatResult,
    pub xp_awarded: u32,
    pub reward: Option<ItemStack>,
}

impl SessionState {
    /// Consumes a finished combat session and writes its result back.
    ///
    /// Survivor health is copied to the originating roster slots with a floor
    /// of 1 HP, so no character ever persists at zero health outside combat.
    /// A win splits the XP reward among living survivors, grants one random
    /// pool item, and puts the triggering faction on its defeat cooldown. A
    /// loss resets the whole session to new-game defaults.
    ///
    /// Returns `None` while no combat is finished (the engine is put back).
    pub fn resolve_combat(
        &mut self,
        catalog: &Catalog,
        rng: &mut SessionRng,
        now: Millis,
    ) -> Option<CombatSummary> {
        let engine = self.combat.take()?;
        let result = match engine.state().phase {
            CombatPhase::Finished { result } => result,
            _ => {
                self.combat = Some(engine);
                return None;
            }
        };
        let final_state = engine.into_state();

        for unit in &final_state.player_units {
            if let Some(character) = self.roster.get_mut(unit.original_index) {
                character.current_health = unit.current_health.max(1).min(character.max_health);
            }
        }

        let faction_id = self.active_combat_faction.take();
        match result {
            CombatResult::Win => {
                self.log("The raiders are routed!");

                let survivors: Vec<usize> = final_state
                    .player_units
                    .iter()
                    .filter(|u| u.is_alive())
                    .map(|u| u.original_index)
                    .collect();
                let mut xp_awarded = 0;
                if !survivors.is_empty() {
                    let share = GameConfig::VICTORY_XP / survivors.len() as u32;
                    self.log(format!(
                        "The squad earns {} XP. Each survivor gains {} XP.",
                        GameConfig::VICTORY_XP,
                        share
                    ));
                    for index in survivors {
                        let gained = match self.roster.get_mut(index) {
                            Some(character) => character.add_xp(share),
                            None => 0,
                        };
                        if gained > 0 {
                            let level = self.roster[index].level;
                            self.log(format!(
                                "Fighter {} reached level {}! Health increased.",
                                index + 1,
                                level
                            ));
                        }
                    }
                    xp_awarded = GameConfig::VICTORY_XP;
                }

                let reward = rng.pick(&catalog.reward_pool).copied().map(|template| {
                    let stack =
                        template.instantiate(&mut self.stack_ids, template.default_quantity);
                    self.log(format!("You received an item: {}!", stack.name));
                    self.inventory.insert_stack(stack.clone());
                    stack
                });

                if let Some(id) = faction_id {
                    if let Some(faction) = self.factions.iter_mut().find(|f| f.id == id) {
                        faction.defeated_until = Some(now + GameConfig::DEFEAT_COOLDOWN_MS);
                    }
                }
                self.mode = Mode::Map;

                Some(CombatSummary {
                    result,
                    xp_awarded,
                    reward,
                })
            }
            CombatResult::Lose => {
                self.log("Your squad was wiped out... Game over.");
                self.reset(catalog, rng);
                Some(CombatSummary {
                    result,
                    xp_awarded: 0,
                    reward: None,
                })
            }
        }
    }
}
