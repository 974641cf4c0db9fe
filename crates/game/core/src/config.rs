use crate::state::{ItemId, WorldPos};

/// Game configuration constants and tunable parameters.
///
/// Everything here is a balance or pacing knob; structural limits live with
/// the types that enforce them.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// World-tick period while the overworld is active.
    pub tick_interval_ms: u64,
}

impl GameConfig {
    // ===== progression =====
    pub const MAX_LEVEL: u32 = 30;
    pub const XP_PER_LEVEL: u32 = 1000;
    pub const BASE_HEALTH: u32 = 12;
    pub const HEALTH_PER_LEVEL: u32 = 3;

    // ===== overworld =====
    pub const MAP_WIDTH: f32 = 200.0;
    pub const MAP_HEIGHT: f32 = 200.0;
    pub const PLAYER_START: WorldPos = WorldPos { x: 100.0, y: 100.0 };
    pub const CITY_RADIUS: f32 = 5.0;
    /// Leaving a city drops the player just outside its radius.
    pub const CITY_EXIT_DISTANCE: f32 = Self::CITY_RADIUS + 2.0;
    pub const CONTACT_DISTANCE: f32 = 4.0;
    pub const PICKUP_DISTANCE: f32 = 3.0;

    // ===== faction AI =====
    pub const FACTION_COUNT: usize = 10;
    pub const FACTION_SQUAD_MIN: u32 = 1;
    pub const FACTION_SQUAD_MAX: u32 = 5;
    pub const FACTION_MEMBER_LEVEL: u32 = 1;
    pub const FACTION_MEMBER_HEALTH: u32 = 15;
    pub const VISION_RANGE: f32 = 25.0;
    pub const PURSUIT_DURATION_MS: u64 = 10_000;
    pub const FACTION_SPEED: f32 = 0.9;
    pub const ARRIVAL_TOLERANCE: f32 = 1.0;
    pub const WANDER_MARGIN: f32 = 5.0;
    pub const SPAWN_CORNER_MARGIN: f32 = 20.0;
    pub const SPAWN_CORNER_JITTER: f32 = 30.0;
    pub const DEFEAT_COOLDOWN_MS: u64 = 5_000;

    // ===== item spawning =====
    pub const QUEST_SPAWN_CHANCE: f64 = 0.001;
    pub const QUEST_ITEM_TTL_MS: u64 = 5_000;
    pub const LOOT_SPAWN_INTERVAL_MS: u64 = 20_000;
    pub const LOOT_ITEM_TTL_MS: u64 = 10_000;
    pub const SPAWN_EDGE_MARGIN: f32 = 10.0;

    // ===== combat =====
    pub const GRID_WIDTH: i32 = 8;
    pub const GRID_HEIGHT: i32 = 10;
    pub const ENEMY_COUNT: usize = 5;
    pub const UNARMED_DAMAGE: u32 = 1;
    /// Per-unit decision budget during the player turn.
    pub const TURN_TIME_MS: u64 = 20_000;
    /// Pacing delay between consecutive enemy actions.
    pub const ENEMY_ACTION_DELAY_MS: u64 = 500;
    /// Attack impact lags the action start by the swing animation.
    pub const ATTACK_IMPACT_DELAY_MS: u64 = 400;
    /// How long the terminal state stays on screen before control returns.
    pub const GAME_OVER_LINGER_MS: u64 = 2_000;
    pub const VICTORY_XP: u32 = 1000;

    // ===== economy =====
    pub const STARTING_SILVER: u32 = 100;
    pub const MERCHANT_STOCK_SIZE: usize = 20;
    pub const QUEST_QUANTITY_MIN: u32 = 1;
    pub const QUEST_QUANTITY_MAX: u32 = 5;
    /// Quest reward formula multiplier over `price * quantity`.
    pub const QUEST_REWARD_FACTOR: u32 = 2;
    pub const MAIN_QUEST_REWARD: u32 = 5000;

    // ===== identity anchors =====
    pub const STARTER_WEAPON: ItemId = ItemId(9);
    pub const MAIN_QUEST_ITEM: ItemId = ItemId(301);
    pub const MAIN_QUEST_ID: &'static str = "main_quest_water_chip";
    pub const SQUAD_SIZE: usize = 5;

    // ===== log =====
    pub const LOG_CAPACITY: usize = 50;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

    pub fn new() -> Self {
        Self {
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn max_health_for_level(level: u32) -> u32 {
        Self::BASE_HEALTH + level * Self::HEALTH_PER_LEVEL
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
