//! The combat state machine driver.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::state::{GridPos, Millis};

use super::{CombatError, CombatEvent, CombatPhase, CombatResult, CombatState, PlayerCommand};

/// Drives a [`CombatState`] to its terminal condition.
///
/// The engine is clock-free: callers pass the current time into
/// [`tick`](Self::tick) and [`command`](Self::command), and every wait is an
/// absolute deadline inside the phase. Ticking with a manual clock replays a
/// whole fight without real time passing.
#[derive(Clone, Debug)]
pub struct CombatEngine {
    state: CombatState,
}

impl CombatEngine {
    pub fn new(state: CombatState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn into_state(self) -> CombatState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state.phase, CombatPhase::Finished { .. })
    }

    pub fn result(&self) -> Option<CombatResult> {
        match self.state.phase {
            CombatPhase::GameOver { result, .. } | CombatPhase::Finished { result } => Some(result),
            _ => None,
        }
    }

    /// Advances the machine as far as `now` allows: selects the next player
    /// unit, expires decision budgets, runs due enemy actions, and settles
    /// terminal states.
    pub fn tick(&mut self, now: Millis) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        while self.step(now, &mut events) {}
        events
    }

    /// Executes an order for the active player unit.
    pub fn command(
        &mut self,
        command: PlayerCommand,
        now: Millis,
    ) -> Result<Vec<CombatEvent>, CombatError> {
        let active = match &self.state.phase {
            CombatPhase::PlayerTurn { active, .. } => {
                active.ok_or(CombatError::NoActiveUnit)?
            }
            CombatPhase::EnemyTurn { .. } => return Err(CombatError::NotPlayerTurn),
            CombatPhase::GameOver { .. } | CombatPhase::Finished { .. } => {
                return Err(CombatError::CombatOver);
            }
        };

        let mut events = Vec::new();
        match command {
            PlayerCommand::Attack { target } => {
                let attacker_pos = self.state.player_units[active].grid_position;
                let enemy = self
                    .state
                    .enemy_units
                    .get(target)
                    .filter(|e| e.is_alive())
                    .ok_or(CombatError::TargetNotFound)?;
                if !attacker_pos.is_adjacent(enemy.grid_position) {
                    return Err(CombatError::OutOfRange);
                }
                let damage = self.state.player_units[active].damage;
                let enemy = &mut self.state.enemy_units[target];
                enemy.current_health = enemy.current_health.saturating_sub(damage);
                events.push(CombatEvent::PlayerStruck {
                    attacker: active,
                    target,
                    damage,
                });
            }
            PlayerCommand::Move { to } => {
                if to.x < 0
                    || to.y < 0
                    || to.x >= GameConfig::GRID_WIDTH
                    || to.y >= GameConfig::GRID_HEIGHT
                {
                    return Err(CombatError::OutOfBounds);
                }
                let from = self.state.player_units[active].grid_position;
                if !from.is_adjacent(to) {
                    return Err(CombatError::OutOfRange);
                }
                if self.occupied_by_living(to) {
                    return Err(CombatError::CellOccupied);
                }
                self.state.player_units[active].grid_position = to;
                events.push(CombatEvent::PlayerMoved { index: active, to });
            }
        }

        // Either action consumes the unit's turn; the next tick advances
        // the selection (or hands over to the enemy).
        self.state.player_units[active].has_taken_turn = true;
        self.state.phase = CombatPhase::PlayerTurn {
            active: None,
            deadline: None,
        };
        self.check_terminal(now, &mut events);
        Ok(events)
    }

    /// One machine transition. Returns true if another step may be due at the
    /// same instant.
    fn step(&mut self, now: Millis, events: &mut Vec<CombatEvent>) -> bool {
        match self.state.phase.clone() {
            CombatPhase::PlayerTurn { active, deadline } => {
                let next = self
                    .state
                    .player_units
                    .iter()
                    .position(|u| u.is_alive() && !u.has_taken_turn);
                let Some(next) = next else {
                    // Every living unit has acted; the enemy takes over.
                    let queue: VecDeque<usize> = self
                        .state
                        .enemy_units
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.is_alive())
                        .map(|(i, _)| i)
                        .collect();
                    self.state.phase = CombatPhase::EnemyTurn {
                        queue,
                        next_action_at: now + GameConfig::ENEMY_ACTION_DELAY_MS,
                    };
                    return false;
                };

                if active != Some(next) {
                    // Auto-advance selection and re-arm the decision budget.
                    let deadline = now + GameConfig::TURN_TIME_MS;
                    self.state.phase = CombatPhase::PlayerTurn {
                        active: Some(next),
                        deadline: Some(deadline),
                    };
                    events.push(CombatEvent::UnitSelected {
                        index: next,
                        deadline,
                    });
                    return false;
                }

                if deadline.is_some_and(|d| now >= d) {
                    self.state.player_units[next].has_taken_turn = true;
                    events.push(CombatEvent::TurnSkipped { index: next });
                    self.state.phase = CombatPhase::PlayerTurn {
                        active: None,
                        deadline: None,
                    };
                    return true;
                }
                false
            }

            CombatPhase::EnemyTurn {
                mut queue,
                next_action_at,
            } => {
                if queue.is_empty() {
                    self.state.round += 1;
                    for unit in &mut self.state.player_units {
                        unit.has_taken_turn = false;
                    }
                    events.push(CombatEvent::RoundStarted {
                        round: self.state.round,
                    });
                    self.state.phase = CombatPhase::PlayerTurn {
                        active: None,
                        deadline: None,
                    };
                    return true;
                }
                if now < next_action_at {
                    self.state.phase = CombatPhase::EnemyTurn {
                        queue,
                        next_action_at,
                    };
                    return false;
                }

                let actor = queue.pop_front().expect("queue checked non-empty");
                let delay = if self.state.enemy_units[actor].is_alive() {
                    self.enemy_act(actor, events)
                } else {
                    // Fell before its slot came up; yield the slot quickly.
                    GameConfig::DEFAULT_TICK_INTERVAL_MS
                };
                self.state.phase = CombatPhase::EnemyTurn {
                    queue,
                    next_action_at: next_action_at + delay,
                };
                !self.check_terminal(now, events)
            }

            CombatPhase::GameOver { result, until } => {
                if now >= until {
                    self.state.phase = CombatPhase::Finished { result };
                    events.push(CombatEvent::Concluded { result });
                }
                false
            }

            CombatPhase::Finished { .. } => false,
        }
    }

    /// Resolves one enemy action and returns the pacing delay until the next
    /// slot: nearest living player by Chebyshev distance (first tie wins),
    /// attack when adjacent, otherwise one diagonal-capable step toward it.
    fn enemy_act(&mut self, actor: usize, events: &mut Vec<CombatEvent>) -> u64 {
        let enemy_pos = self.state.enemy_units[actor].grid_position;

        let mut target: Option<usize> = None;
        let mut best = i32::MAX;
        for (i, unit) in self.state.player_units.iter().enumerate() {
            if !unit.is_alive() {
                continue;
            }
            let dist = unit.grid_position.chebyshev(enemy_pos);
            if dist < best {
                best = dist;
                target = Some(i);
            }
        }
        let Some(target) = target else {
            return GameConfig::DEFAULT_TICK_INTERVAL_MS;
        };

        let target_pos = self.state.player_units[target].grid_position;
        if enemy_pos.is_adjacent(target_pos) {
            let damage = self.state.enemy_units[actor].damage;
            let unit = &mut self.state.player_units[target];
            unit.current_health = unit.current_health.saturating_sub(damage);
            events.push(CombatEvent::EnemyStruck {
                attacker: actor,
                target,
                damage,
            });
            GameConfig::ATTACK_IMPACT_DELAY_MS + GameConfig::ENEMY_ACTION_DELAY_MS
        } else {
            let mut to = enemy_pos;
            to.x += (target_pos.x - enemy_pos.x).signum();
            to.y += (target_pos.y - enemy_pos.y).signum();
            if self.occupied_by_living(to) {
                events.push(CombatEvent::EnemyHeld { index: actor });
            } else {
                self.state.enemy_units[actor].grid_position = to;
                events.push(CombatEvent::EnemyAdvanced { index: actor, to });
            }
            GameConfig::ENEMY_ACTION_DELAY_MS
        }
    }

    /// Checks both victory conditions after a mutation and freezes the
    /// machine on a verdict. Returns true if the state became terminal.
    fn check_terminal(&mut self, now: Millis, events: &mut Vec<CombatEvent>) -> bool {
        if matches!(
            self.state.phase,
            CombatPhase::GameOver { .. } | CombatPhase::Finished { .. }
        ) {
            return true;
        }
        let player_wiped = self.state.player_units.iter().all(|u| !u.is_alive());
        let enemy_wiped = self.state.enemy_units.iter().all(|u| !u.is_alive());
        let result = if enemy_wiped {
            events.push(CombatEvent::Victory);
            CombatResult::Win
        } else if player_wiped {
            events.push(CombatEvent::Defeat);
            CombatResult::Lose
        } else {
            return false;
        };
        self.state.phase = CombatPhase::GameOver {
            result,
            until: now + GameConfig::GAME_OVER_LINGER_MS,
        };
        true
    }

    fn occupied_by_living(&self, pos: GridPos) -> bool {
        self.state
            .player_units
            .iter()
            .chain(self.state.enemy_units.iter())
            .any(|u| u.is_alive() && u.grid_position == pos)
    }
}
