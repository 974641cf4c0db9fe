//! The overworld tick.
//!
//! Runs on a fixed-period scheduler while the map is active. Step order
//! matters: expiry and spawns first, then city/faction contact checks (a
//! transition short-circuits the rest of the tick), then faction AI.

mod ai;
mod spawn;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::SessionRng;
use crate::state::{FactionId, Millis, Mode, SessionState};

/// What a tick concluded. A transition tells the scheduler to stop ticking
/// the overworld until control returns to the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    EnteredCity(String),
    CombatStarted(FactionId),
}

impl SessionState {
    /// Advances the overworld by one tick. No-op outside map mode.
    pub fn world_tick(
        &mut self,
        catalog: &Catalog,
        rng: &mut SessionRng,
        now: Millis,
    ) -> TickOutcome {
        if self.mode != Mode::Map {
            return TickOutcome::Continue;
        }

        self.sweep_expired_items(now);
        self.roll_quest_item_spawn(catalog, rng, now);
        self.roll_loot_spawn(catalog, rng, now);

        // City before faction: the first city in registry order wins.
        let player = self.player_position;
        let entered = catalog
            .cities
            .iter()
            .find(|city| player.distance_to(city.position) < GameConfig::CITY_RADIUS)
            .map(|city| city.id.to_string());
        if let Some(city_id) = entered {
            self.enter_city(&city_id, catalog, rng);
            return TickOutcome::EnteredCity(city_id);
        }

        // First non-defeated faction in list order wins; no distance ranking
        // among simultaneous matches.
        let contact = self
            .factions
            .iter()
            .find(|f| {
                !f.is_defeated(now)
                    && player.distance_to(f.position) < GameConfig::CONTACT_DISTANCE
            })
            .map(|f| f.id);
        if let Some(faction_id) = contact {
            self.start_combat(faction_id, now);
            return TickOutcome::CombatStarted(faction_id);
        }

        self.update_factions(catalog, rng, now);
        TickOutcome::Continue
    }
}
