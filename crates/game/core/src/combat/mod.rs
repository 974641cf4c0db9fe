//! Turn-based grid combat.
//!
//! A combat session is an ephemeral projection of the roster and a faction
//! crew onto an 8x10 grid. [`CombatEngine`] drives the state machine,
//! [`build_combat_state`] opens sessions, and resolution writes results back
//! to the persistent state.

mod engine;
mod outcome;
mod setup;

pub use engine::CombatEngine;
pub use outcome::CombatSummary;
pub use setup::build_combat_state;

use std::collections::VecDeque;

use crate::state::{GridPos, Millis};

/// Ephemeral projection of a character into a combat session.
///
/// `original_index` points back into the owning roster (or faction crew);
/// the unit itself is never the source of truth.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatUnit {
    pub original_index: usize,
    pub icon: String,
    pub is_player: bool,
    pub grid_position: GridPos,
    pub max_health: u32,
    pub current_health: u32,
    pub damage: u32,
    pub armor: u32,
    pub has_taken_turn: bool,
}

impl CombatUnit {
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }
}

/// Terminal verdict of a combat session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatResult {
    Win,
    Lose,
}

/// Phase of the combat state machine. All waits are absolute deadlines,
/// re-armed on every transition; nothing in here reads a clock.
#[derive(Clone, Debug, PartialEq)]
pub enum CombatPhase {
    /// Roster units act one at a time; `active` is auto-advanced to the next
    /// living unit that has not acted, and `deadline` is its decision budget.
    PlayerTurn {
        active: Option<usize>,
        deadline: Option<Millis>,
    },
    /// Living enemies act sequentially with a fixed pacing delay.
    EnemyTurn {
        queue: VecDeque<usize>,
        next_action_at: Millis,
    },
    /// Terminal state frozen for a short display period.
    GameOver { result: CombatResult, until: Millis },
    /// Display period elapsed; the session is ready for resolution.
    Finished { result: CombatResult },
}

/// Full combat session state.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatState {
    pub player_units: Vec<CombatUnit>,
    pub enemy_units: Vec<CombatUnit>,
    pub phase: CombatPhase,
    pub round: u32,
}

impl CombatState {
    pub fn living_players(&self) -> impl Iterator<Item = &CombatUnit> {
        self.player_units.iter().filter(|u| u.is_alive())
    }

    pub fn living_enemies(&self) -> impl Iterator<Item = &CombatUnit> {
        self.enemy_units.iter().filter(|u| u.is_alive())
    }
}

/// An order for the currently active player unit. Attacking and moving are
/// mutually exclusive; either consumes the unit's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Strike the enemy at `target` (index into the enemy list). Requires
    /// Chebyshev distance exactly 1.
    Attack { target: usize },
    /// Step to an adjacent empty cell.
    Move { to: GridPos },
}

/// Observable combat happenings, in order of occurrence. Consumed by the
/// driver for pacing/logging; the engine state is already updated.
#[derive(Clone, Debug, PartialEq)]
pub enum CombatEvent {
    UnitSelected { index: usize, deadline: Millis },
    TurnSkipped { index: usize },
    PlayerStruck { attacker: usize, target: usize, damage: u32 },
    PlayerMoved { index: usize, to: GridPos },
    EnemyStruck { attacker: usize, target: usize, damage: u32 },
    EnemyAdvanced { index: usize, to: GridPos },
    EnemyHeld { index: usize },
    RoundStarted { round: u32 },
    Victory,
    Defeat,
    Concluded { result: CombatResult },
}

/// Rejections for invalid player orders. The session state is untouched on
/// every error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("it is not the player's turn")]
    NotPlayerTurn,
    #[error("no unit is currently active")]
    NoActiveUnit,
    #[error("target unit not found or already down")]
    TargetNotFound,
    #[error("target is out of reach")]
    OutOfRange,
    #[error("destination cell is occupied")]
    CellOccupied,
    #[error("destination is outside the grid")]
    OutOfBounds,
    #[error("combat has already concluded")]
    CombatOver,
}
