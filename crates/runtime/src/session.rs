//! The session facade: one handle through which all mutations flow.

use wastes_core::{
    ActionError, Catalog, CombatEvent, CombatSummary, Millis, Mode, PlayerCommand, Quest,
    QuestError, SessionRng, SessionState, StackId, TickOutcome,
};

use crate::error::{Result, RuntimeError};
use crate::snapshot::SaveData;

/// Owns the session state together with its catalog and seeded RNG.
///
/// The scheduler holds one `Session` behind a mutex; UI layers call through
/// the same handle. The core state is reachable via
/// [`state`](Self::state)/[`state_mut`](Self::state_mut) for operations that
/// need neither the catalog nor the RNG.
pub struct Session {
    state: SessionState,
    catalog: Catalog,
    rng: SessionRng,
}

impl Session {
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        let mut rng = SessionRng::from_seed(seed);
        let state = SessionState::new_game(&catalog, &mut rng);
        tracing::info!(seed, "session created");
        Self {
            state,
            catalog,
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== lifecycle =====

    /// Resets to new-game defaults (splash state).
    pub fn new_game(&mut self) {
        self.state.reset(&self.catalog, &mut self.rng);
        tracing::info!("session reset to new game");
    }

    /// Intro completed: the main quest line starts and play moves to the map.
    pub fn finish_intro(&mut self, now: Millis) {
        self.state.begin_main_quest(&self.catalog);
        self.state.last_loot_spawn = now;
    }

    /// Resumes a loaded session on the map.
    pub fn restore(&mut self, data: SaveData, now: Millis) {
        self.state = data.restore(&self.catalog, &mut self.rng);
        self.state.last_loot_spawn = now;
        tracing::info!("session restored from snapshot");
    }

    pub fn save_data(&self) -> SaveData {
        SaveData::capture(&self.state)
    }

    // ===== overworld =====

    pub fn tick(&mut self, now: Millis) -> TickOutcome {
        let outcome = self.state.world_tick(&self.catalog, &mut self.rng, now);
        match &outcome {
            TickOutcome::Continue => {}
            TickOutcome::EnteredCity(city) => tracing::info!(%city, "entered city"),
            TickOutcome::CombatStarted(faction) => {
                tracing::info!(%faction, "combat started")
            }
        }
        outcome
    }

    /// Drops an inventory stack onto the map near the player.
    pub fn drop_item(&mut self, stack: StackId) -> std::result::Result<(), ActionError> {
        self.state.drop_item(stack, &mut self.rng)
    }

    // ===== city & quests =====

    pub fn exit_city(&mut self) {
        self.state.exit_city(&self.catalog, &mut self.rng);
    }

    pub fn offer_quest(&mut self) -> std::result::Result<Quest, QuestError> {
        self.state.offer_quest(&self.catalog, &mut self.rng)
    }

    // ===== combat =====

    /// Advances any active combat to `now`.
    pub fn combat_tick(&mut self, now: Millis) -> Vec<CombatEvent> {
        match self.state.combat.as_mut() {
            Some(engine) => engine.tick(now),
            None => Vec::new(),
        }
    }

    /// Issues an order for the active combat unit.
    pub fn combat_command(
        &mut self,
        command: PlayerCommand,
        now: Millis,
    ) -> Result<Vec<CombatEvent>> {
        let engine = self.state.combat.as_mut().ok_or(RuntimeError::NoCombat)?;
        Ok(engine.command(command, now)?)
    }

    pub fn combat_finished(&self) -> bool {
        self.state
            .combat
            .as_ref()
            .is_some_and(|engine| engine.is_finished())
    }

    /// Applies a finished combat back to the session.
    pub fn resolve_combat(&mut self, now: Millis) -> Option<CombatSummary> {
        let summary = self
            .state
            .resolve_combat(&self.catalog, &mut self.rng, now);
        if let Some(summary) = &summary {
            tracing::info!(result = ?summary.result, xp = summary.xp_awarded, "combat resolved");
        }
        summary
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }
}
