//! Roster characters and their progression state.

use crate::config::GameConfig;

use super::ItemStack;

/// One member of a squad: the player roster or a faction's disposable crew.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub weapon: Option<ItemStack>,
    pub armor: Option<ItemStack>,
    pub level: u32,
    pub xp: u32,
    pub max_health: u32,
    pub current_health: u32,
}

impl Character {
    /// Fresh character at the given level, at full health for that level.
    pub fn at_level(level: u32) -> Self {
        let max_health = GameConfig::max_health_for_level(level);
        Self {
            weapon: None,
            armor: None,
            level,
            xp: 0,
            max_health,
            current_health: max_health,
        }
    }

    /// Faction crew member: fixed level and health, no gear.
    pub fn faction_member() -> Self {
        Self {
            weapon: None,
            armor: None,
            level: GameConfig::FACTION_MEMBER_LEVEL,
            xp: 0,
            max_health: GameConfig::FACTION_MEMBER_HEALTH,
            current_health: GameConfig::FACTION_MEMBER_HEALTH,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Effective attack value: weapon damage, or bare fists.
    pub fn attack_damage(&self) -> u32 {
        self.weapon
            .as_ref()
            .and_then(|w| w.damage)
            .unwrap_or(GameConfig::UNARMED_DAMAGE)
    }

    pub fn armor_value(&self) -> u32 {
        self.armor.as_ref().and_then(|a| a.armor).unwrap_or(0)
    }

    /// Heals up to `amount`, capped at max health.
    pub fn heal(&mut self, amount: u32) {
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    /// Clamps health into `[0, max_health]` and recomputes a missing or stale
    /// max from the level. Used when restoring old snapshots.
    pub fn normalize(&mut self) {
        if self.max_health == 0 {
            self.max_health = GameConfig::max_health_for_level(self.level);
        }
        if self.current_health == 0 || self.current_health > self.max_health {
            self.current_health = self.max_health;
        }
    }
}
