//! Cooperative drivers for the overworld tick and combat pacing.
//!
//! One periodic task drives the world while the map is active; during combat
//! a second driver interleaves player commands with the engine's scheduled
//! enemy actions. All state mutation is serialized through the session
//! mutex, and leaving a mode stops its driver — no timer survives a
//! transition.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, mpsc};
use tokio::time::MissedTickBehavior;
use wastes_core::{CombatSummary, GameConfig, Mode, PlayerCommand, TickOutcome};

use crate::clock::Clock;
use crate::session::Session;

/// Fixed-interval driver configuration.
#[derive(Clone, Debug)]
pub struct Scheduler {
    pub tick_interval: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_millis(GameConfig::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Runs the overworld tick until a transition fires or the session
    /// leaves the map/inventory modes. Returns the outcome that stopped it.
    pub async fn run_overworld<C: Clock + ?Sized>(
        &self,
        session: Arc<Mutex<Session>>,
        clock: Arc<C>,
    ) -> TickOutcome {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let mut session = session.lock().await;
            match session.mode() {
                // The tick itself is a no-op outside map mode, but the
                // driver keeps breathing while the player digs through the
                // inventory screen.
                Mode::Map | Mode::Inventory => {}
                _ => return TickOutcome::Continue,
            }
            let now = clock.now();
            let outcome = session.tick(now);
            if outcome != TickOutcome::Continue {
                return outcome;
            }
        }
    }

    /// Drives an active combat to completion: engine deadlines advance on
    /// the tick cadence and player commands arrive over the channel.
    /// Invalid commands are rejected without touching the state.
    ///
    /// Resolution (XP, loot, defeat cooldown or session reset) happens here
    /// as soon as the engine reports the session finished.
    pub async fn run_combat<C: Clock + ?Sized>(
        &self,
        session: Arc<Mutex<Session>>,
        clock: Arc<C>,
        mut commands: mpsc::Receiver<PlayerCommand>,
    ) -> Option<CombatSummary> {
        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // When the command source goes away the fight still resolves on its
        // own: decision budgets expire and enemies keep acting.
        let mut commands_open = true;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let mut session = session.lock().await;
                    session.combat_tick(clock.now());
                    if session.combat_finished() {
                        return session.resolve_combat(clock.now());
                    }
                }
                command = commands.recv(), if commands_open => {
                    let Some(command) = command else {
                        commands_open = false;
                        continue;
                    };
                    let mut session = session.lock().await;
                    let now = clock.now();
                    if let Err(error) = session.combat_command(command, now) {
                        tracing::debug!(%error, "combat command rejected");
                    }
                    session.combat_tick(now);
                    if session.combat_finished() {
                        return session.resolve_combat(now);
                    }
                }
            }
        }
    }
}
