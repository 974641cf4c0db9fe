//! Per-tick faction AI: respawn, pursuit, wander, movement.

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::rng::SessionRng;
use crate::state::{Faction, FactionAiState, Millis, SessionState, WorldPos};

impl SessionState {
    /// Runs the AI update for every faction. Only reached when no contact or
    /// city transition fired this tick.
    pub(super) fn update_factions(&mut self, catalog: &Catalog, rng: &mut SessionRng, now: Millis) {
        let player = self.player_position;
        for faction in &mut self.factions {
            update_faction(faction, player, catalog, rng, now);
        }
    }
}

fn update_faction(
    faction: &mut Faction,
    player: WorldPos,
    catalog: &Catalog,
    rng: &mut SessionRng,
    now: Millis,
) {
    // Cooldown lapsed: re-roll the faction in place under the same id.
    if faction.is_respawn_due(now) {
        if let Some(template) = rng.pick(&catalog.faction_templates).copied() {
            *faction = Faction::generate(faction.id, &template, rng);
        } else {
            faction.defeated_until = None;
        }
    }
    if faction.is_defeated(now) {
        return;
    }

    // Sighting the player (re)arms the pursuit window every tick.
    if player.distance_to(faction.position) < GameConfig::VISION_RANGE {
        faction.ai_state = FactionAiState::Pursuing;
        faction.pursue_until = Some(now + GameConfig::PURSUIT_DURATION_MS);
    }

    // Pursuit exhausted: give up and wander somewhere new.
    if faction.ai_state == FactionAiState::Pursuing
        && faction.pursue_until.is_some_and(|until| now > until)
    {
        faction.ai_state = FactionAiState::Idle;
        faction.pursue_until = None;
        faction.target_position = random_wander_target(rng);
    }

    match faction.ai_state {
        FactionAiState::Pursuing => {
            // Track the player's live position.
            faction.target_position = player;
        }
        FactionAiState::Idle => {
            if faction.position.distance_to(faction.target_position)
                < GameConfig::ARRIVAL_TOLERANCE
            {
                faction.target_position = random_wander_target(rng);
            }
        }
    }

    faction.position = faction
        .position
        .step_toward(faction.target_position, GameConfig::FACTION_SPEED);
}

fn random_wander_target(rng: &mut SessionRng) -> WorldPos {
    let margin = GameConfig::WANDER_MARGIN;
    WorldPos::new(
        rng.range_f32(margin, GameConfig::MAP_WIDTH - margin),
        rng.range_f32(margin, GameConfig::MAP_HEIGHT - margin),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FactionId;
    use crate::test_support::minimal_catalog;

    fn idle_faction(position: WorldPos) -> Faction {
        let template = crate::catalog::FactionTemplate {
            name: "Scrap Hounds",
            icon: "🐕",
            color: "#eab308",
        };
        let mut faction =
            Faction::generate(FactionId(0), &template, &mut SessionRng::from_seed(9));
        faction.position = position;
        faction.target_position = position;
        faction
    }

    #[test]
    fn player_in_vision_range_triggers_pursuit() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        let player = WorldPos::new(60.0, 50.0);

        update_faction(&mut faction, player, &catalog, &mut rng, Millis(1_000));

        assert_eq!(faction.ai_state, FactionAiState::Pursuing);
        assert_eq!(faction.pursue_until, Some(Millis(11_000)));
        assert_eq!(faction.target_position, player);
        // Moved one speed-step toward the player.
        assert!((faction.position.x - 50.9).abs() < 1e-4);
        assert!((faction.position.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn pursuit_expires_back_to_wandering() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        faction.ai_state = FactionAiState::Pursuing;
        faction.pursue_until = Some(Millis(5_000));
        let player = WorldPos::new(150.0, 150.0); // far outside vision

        update_faction(&mut faction, player, &catalog, &mut rng, Millis(6_000));

        assert_eq!(faction.ai_state, FactionAiState::Idle);
        assert!(faction.pursue_until.is_none());
        assert_ne!(faction.target_position, player);
    }

    #[test]
    fn pursuit_rearms_while_player_stays_visible() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        let player = WorldPos::new(55.0, 50.0);

        update_faction(&mut faction, player, &catalog, &mut rng, Millis(1_000));
        update_faction(&mut faction, player, &catalog, &mut rng, Millis(9_000));
        // The window tracks the latest sighting, not the first.
        assert_eq!(faction.pursue_until, Some(Millis(19_000)));
    }

    #[test]
    fn defeated_faction_neither_moves_nor_pursues() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        faction.defeated_until = Some(Millis(10_000));
        let player = WorldPos::new(51.0, 50.0);

        update_faction(&mut faction, player, &catalog, &mut rng, Millis(1_000));

        assert_eq!(faction.position, WorldPos::new(50.0, 50.0));
        assert_eq!(faction.ai_state, FactionAiState::Idle);
    }

    #[test]
    fn respawn_rerolls_in_place_keeping_the_id() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        faction.defeated_until = Some(Millis(10_000));
        faction.characters.clear();

        // Map center is out of vision range of every spawn corner.
        update_faction(
            &mut faction,
            WorldPos::new(100.0, 100.0),
            &catalog,
            &mut rng,
            Millis(10_000),
        );

        assert_eq!(faction.id, FactionId(0));
        assert!(faction.defeated_until.is_none());
        assert!(!faction.characters.is_empty());
        assert_eq!(faction.ai_state, FactionAiState::Idle);
    }

    #[test]
    fn idle_faction_picks_a_new_target_on_arrival() {
        let catalog = minimal_catalog();
        let mut rng = SessionRng::from_seed(2);
        let mut faction = idle_faction(WorldPos::new(50.0, 50.0));
        let far_player = WorldPos::new(190.0, 190.0);

        update_faction(&mut faction, far_player, &catalog, &mut rng, Millis(1_000));
        // Standing on its target: a fresh wander target was rolled and the
        // faction stepped toward it.
        assert_ne!(faction.target_position, WorldPos::new(50.0, 50.0));
        assert_ne!(faction.position, WorldPos::new(50.0, 50.0));
    }
}
