//! Builds a combat session from the live roster and a faction.

use crate::config::GameConfig;
use crate::state::{Character, Faction, FactionId, GridPos, Millis, SessionState};

use super::{CombatEngine, CombatPhase, CombatState, CombatUnit};

/// Projects the roster and a faction crew onto the combat grid.
///
/// Player units line the bottom row (centered, roster order); a fixed batch
/// of enemies lines the top row. Enemy health scales with the squad's average
/// level and enemy damage with the squad's average weapon damage.
pub fn build_combat_state(roster: &[Character], faction: &Faction) -> CombatState {
    let squad = roster.len();
    let player_start_x = (GameConfig::GRID_WIDTH - squad as i32) / 2;

    let player_units: Vec<CombatUnit> = roster
        .iter()
        .enumerate()
        .map(|(index, character)| CombatUnit {
            original_index: index,
            icon: "🚶".to_string(),
            is_player: true,
            grid_position: GridPos::new(
                player_start_x + index as i32,
                GameConfig::GRID_HEIGHT - 2,
            ),
            max_health: character.max_health,
            current_health: character.current_health,
            damage: character.attack_damage(),
            armor: character.armor_value(),
            has_taken_turn: false,
        })
        .collect();

    let enemy_damage = average_squad_damage(roster).max(1);
    let enemy_health = GameConfig::max_health_for_level(average_squad_level(roster));
    let enemy_start_x = (GameConfig::GRID_WIDTH - GameConfig::ENEMY_COUNT as i32) / 2;

    let enemy_units: Vec<CombatUnit> = (0..GameConfig::ENEMY_COUNT)
        .map(|index| CombatUnit {
            original_index: index,
            icon: faction.icon.clone(),
            is_player: false,
            grid_position: GridPos::new(enemy_start_x + index as i32, 1),
            max_health: enemy_health,
            current_health: enemy_health,
            damage: enemy_damage,
            armor: 0,
            has_taken_turn: false,
        })
        .collect();

    CombatState {
        player_units,
        enemy_units,
        phase: CombatPhase::PlayerTurn {
            active: None,
            deadline: None,
        },
        round: 1,
    }
}

fn average_squad_damage(roster: &[Character]) -> u32 {
    if roster.is_empty() {
        return 5;
    }
    let total: u32 = roster.iter().map(Character::attack_damage).sum();
    (total as f32 / roster.len() as f32).round() as u32
}

fn average_squad_level(roster: &[Character]) -> u32 {
    if roster.is_empty() {
        return 1;
    }
    let total: u32 = roster.iter().map(|c| c.level).sum();
    (total as f32 / roster.len() as f32).round() as u32
}

impl SessionState {
    /// Opens a combat session against the given faction and switches to
    /// combat mode. The overworld tick stops for the duration.
    pub fn start_combat(&mut self, faction_id: FactionId, now: Millis) {
        let Some(faction) = self.factions.iter().find(|f| f.id == faction_id) else {
            return;
        };
        let message = format!("Contact with the {}!", faction.name);
        let combat_state = build_combat_state(&self.roster, faction);
        self.log(message);
        let mut engine = CombatEngine::new(combat_state);
        engine.tick(now);
        self.combat = Some(engine);
        self.active_combat_faction = Some(faction_id);
        self.mode = crate::state::Mode::Combat;
    }
}
