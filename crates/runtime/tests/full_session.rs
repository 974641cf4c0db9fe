//! End-to-end session scenario.
//!
//! Walks one session through the whole loop against a manual clock:
//! intro → overworld ticks → faction contact → combat win → rewards →
//! city visit with trade and a fetch quest → save → load.

use wastes_core::{
    CombatEngine, CombatPhase, CombatResult, CombatState, CombatUnit, GameConfig, GridPos,
    MainQuestState, Millis, Mode, PlayerCommand, TickOutcome, WorldPos,
};
use wastes_runtime::{MemorySaveStore, SaveStore, Session};

fn park_factions(session: &mut Session) {
    for faction in &mut session.state_mut().factions {
        faction.position = WorldPos::new(10.0, 10.0);
        faction.target_position = WorldPos::new(10.0, 10.0);
    }
}

#[tokio::test]
async fn complete_session_scenario() {
    let mut session = Session::new(wastes_content::default_catalog(), 1234);
    let mut now = Millis(0);

    // ── Phase 1: intro hands over to the map with the main quest armed ──
    session.finish_intro(now);
    assert_eq!(session.mode(), Mode::Map);
    assert_eq!(session.state().main_quest, MainQuestState::FindChip);
    assert!(
        session
            .state()
            .quests
            .iter()
            .any(|q| q.id == GameConfig::MAIN_QUEST_ID)
    );

    // ── Phase 2: quiet overworld ticks pass without incident ──
    park_factions(&mut session);
    session.state_mut().player_position = WorldPos::new(100.0, 100.0);
    for _ in 0..20 {
        now = now + 100;
        assert_eq!(session.tick(now), TickOutcome::Continue);
    }

    // ── Phase 3: a faction walks into the player and combat opens ──
    session.state_mut().factions[0].position = WorldPos::new(102.0, 100.0);
    now = now + 100;
    let outcome = session.tick(now);
    let faction_id = match outcome {
        TickOutcome::CombatStarted(id) => id,
        other => panic!("expected combat, got {other:?}"),
    };
    assert_eq!(session.mode(), Mode::Combat);

    // Stage a nearly-won board for the same fight: one enemy left, in
    // reach of the whole squad's positions.
    let roster_units: Vec<CombatUnit> = session
        .state()
        .roster
        .iter()
        .enumerate()
        .map(|(i, c)| CombatUnit {
            original_index: i,
            icon: "🚶".into(),
            is_player: true,
            grid_position: GridPos::new(2 + i as i32, 5),
            max_health: c.max_health,
            current_health: c.current_health,
            damage: c.attack_damage(),
            armor: c.armor_value(),
            has_taken_turn: false,
        })
        .collect();
    let last_enemy = CombatUnit {
        original_index: 0,
        icon: "🤠".into(),
        is_player: false,
        grid_position: GridPos::new(3, 4),
        max_health: 12,
        current_health: 4,
        damage: 4,
        armor: 0,
        has_taken_turn: false,
    };
    session.state_mut().combat = Some(CombatEngine::new(CombatState {
        player_units: roster_units,
        enemy_units: vec![last_enemy],
        phase: CombatPhase::PlayerTurn {
            active: None,
            deadline: None,
        },
        round: 3,
    }));

    // ── Phase 4: the finishing blow, then the linger and resolution ──
    now = now + 100;
    session.combat_tick(now); // selects unit 0
    let events = session
        .combat_command(PlayerCommand::Attack { target: 0 }, now)
        .expect("adjacent attack");
    assert!(!events.is_empty());
    assert!(!session.combat_finished()); // still lingering on game-over

    now = now + GameConfig::GAME_OVER_LINGER_MS + 100;
    session.combat_tick(now);
    assert!(session.combat_finished());

    let summary = session.resolve_combat(now).expect("finished combat");
    assert_eq!(summary.result, CombatResult::Win);
    assert_eq!(summary.xp_awarded, GameConfig::VICTORY_XP);
    let reward = summary.reward.expect("victory loot");
    assert!(session.state().inventory.get(reward.stack_id).is_some());
    // Five survivors split 1000 XP evenly.
    assert!(session.state().roster.iter().all(|c| c.xp == 200));
    let faction = session
        .state()
        .factions
        .iter()
        .find(|f| f.id == faction_id)
        .unwrap();
    assert!(faction.is_defeated(now));
    assert_eq!(session.mode(), Mode::Map);

    // ── Phase 5: city visit — trade and a fetch quest ──
    session.state_mut().player_position = session.catalog().city("oasis").unwrap().position;
    now = now + 100;
    assert_eq!(session.tick(now), TickOutcome::EnteredCity("oasis".into()));
    assert_eq!(
        session.state().merchant_stocks["oasis"].len(),
        GameConfig::MERCHANT_STOCK_SIZE
    );

    let silver_before = session.state().silver;
    let (buy_id, price) = {
        let item = session.state().merchant_stocks["oasis"]
            .iter()
            .find(|s| s.price.unwrap_or(u32::MAX) <= silver_before)
            .expect("something affordable in stock");
        (item.stack_id, item.price.unwrap())
    };
    session.state_mut().buy(buy_id).expect("can afford");
    assert_eq!(session.state().silver, silver_before - price);
    session.state_mut().sell(buy_id).expect("sell it back");
    assert_eq!(session.state().silver, silver_before);

    let quest = session.offer_quest().expect("merchant offers a job");
    let quest_id = quest.id.clone();
    let wanted = quest.item;
    let needed = quest.required_quantity;
    let reward_silver = quest.reward_silver;
    session.state_mut().accept_quest(quest);

    // Scrounge up the requested goods and turn them in.
    let template = *session.catalog().template(wanted).unwrap();
    {
        let state = session.state_mut();
        state
            .inventory
            .add_from_template(&mut state.stack_ids, &template, needed);
    }
    let silver_before = session.state().silver;
    assert_eq!(
        session.state_mut().complete_quest(&quest_id),
        Ok(reward_silver)
    );
    assert_eq!(session.state().silver, silver_before + reward_silver);

    session.exit_city();
    assert_eq!(session.mode(), Mode::Map);

    // ── Phase 6: save, then load into a fresh session ──
    let store = MemorySaveStore::new();
    store.save(&session.save_data()).await.unwrap();

    let mut revived = Session::new(wastes_content::default_catalog(), 99);
    let data = store.load().await.unwrap().expect("snapshot present");
    revived.restore(data, Millis(0));

    assert_eq!(revived.state().silver, session.state().silver);
    assert_eq!(revived.state().roster, session.state().roster);
    assert_eq!(revived.state().main_quest, MainQuestState::FindChip);
    assert_eq!(revived.state().quests.len(), session.state().quests.len());
    assert_eq!(revived.mode(), Mode::Map);
}
