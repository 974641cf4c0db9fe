//! Roaming hostile factions.

use crate::catalog::FactionTemplate;
use crate::config::GameConfig;
use crate::rng::SessionRng;

use super::{Character, FactionId, Millis, WorldPos};

/// Overworld AI state of a faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactionAiState {
    /// Wandering between random targets.
    #[default]
    Idle,
    /// Re-targeting the player's live position every tick.
    Pursuing,
}

/// A roaming hostile NPC group with a disposable crew.
///
/// Never permanently destroyed: while `defeated_until` is in the future the
/// faction is inert, and once the cooldown lapses it is re-rolled in place
/// under the same id.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Faction {
    pub id: FactionId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub characters: Vec<Character>,
    pub position: WorldPos,
    pub target_position: WorldPos,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defeated_until: Option<Millis>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai_state: FactionAiState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pursue_until: Option<Millis>,
}

impl Faction {
    /// Rolls a fresh faction from a template: random crew size, spawn at a
    /// random map corner, idle.
    pub fn generate(id: FactionId, template: &FactionTemplate, rng: &mut SessionRng) -> Self {
        let crew = rng.range_u32(GameConfig::FACTION_SQUAD_MIN, GameConfig::FACTION_SQUAD_MAX);
        let characters = (0..crew).map(|_| Character::faction_member()).collect();
        let position = Self::random_corner(rng);
        Self {
            id,
            name: template.name.to_string(),
            icon: template.icon.to_string(),
            color: template.color.to_string(),
            characters,
            position,
            target_position: position,
            defeated_until: None,
            ai_state: FactionAiState::Idle,
            pursue_until: None,
        }
    }

    /// True while the defeat cooldown holds: no movement, no contact.
    pub fn is_defeated(&self, now: Millis) -> bool {
        self.defeated_until.is_some_and(|until| now < until)
    }

    /// Cooldown has lapsed and the faction is due for a fresh roll.
    pub fn is_respawn_due(&self, now: Millis) -> bool {
        self.defeated_until.is_some_and(|until| now >= until)
    }

    fn random_corner(rng: &mut SessionRng) -> WorldPos {
        let margin = GameConfig::SPAWN_CORNER_MARGIN;
        let jitter = GameConfig::SPAWN_CORNER_JITTER;
        let near = |r: &mut SessionRng| margin + r.range_f32(0.0, jitter);
        let far_x = |r: &mut SessionRng| GameConfig::MAP_WIDTH - margin - r.range_f32(0.0, jitter);
        let far_y = |r: &mut SessionRng| GameConfig::MAP_HEIGHT - margin - r.range_f32(0.0, jitter);
        match rng.range_u32(0, 3) {
            0 => WorldPos::new(near(rng), near(rng)),
            1 => WorldPos::new(far_x(rng), near(rng)),
            2 => WorldPos::new(near(rng), far_y(rng)),
            _ => WorldPos::new(far_x(rng), far_y(rng)),
        }
    }
}
