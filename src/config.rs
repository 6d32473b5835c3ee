//! Runtime gameplay configuration.
//!
//! [`GameConfig`] mirrors every tunable in [`crate::constants`].  The binary
//! builds it once at startup (optionally overriding defaults from
//! `fly_rush.toml`) and then hands `&GameConfig` to every simulation call.
//! Missing keys fall back to the compile-time defaults, so a minimal TOML can
//! override just the values you care about.
//!
//! Values are not validated: a zero spawn period simply fires every frame and
//! a zero gate denominator is treated as "always".

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Period and gate for one spawn category.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SpawnRule {
    /// Frames between spawn opportunities.
    pub period: u32,
    /// An opportunity spawns with probability `1 / gate`.
    pub gate: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Clock & playfield ────────────────────────────────────────────────────
    pub fps: u32,
    pub screen_w: f32,
    pub screen_h: f32,
    pub background_speed: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_size: (f32, f32),
    pub player_start: (f32, f32),
    pub player_speed_x_right: f32,
    pub player_speed_x_left: f32,
    pub player_speed_y: f32,
    pub player_reload_time: u32,
    pub player_immortal_after_hit: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_size: (f32, f32),
    pub bullet_collide_shrink: (f32, f32),
    pub player_bullet_speed: f32,
    pub enemy_bullet_speed: f32,

    // ── Enemies ──────────────────────────────────────────────────────────────
    pub enemy_size_type_1: (f32, f32),
    pub enemy_size_type_2: (f32, f32),
    pub enemy_speed_x: f32,
    pub enemy_speed_y: f32,
    pub enemy_delta_y: (u32, u32),
    pub enemy_reload_range: (u32, u32),
    pub enemy_cap: usize,
    pub enemy_kill_reward: (u32, u32),

    // ── Pickups ──────────────────────────────────────────────────────────────
    pub coin_size: (f32, f32),
    pub coin_collide_scale: (f32, f32),
    pub coin_speed_x: f32,
    pub coin_speed_y: f32,
    pub coin_weights: [u32; 3],
    pub coin_values: [u32; 3],
    /// Upper bound on the coin balance; `None` means unbounded.
    pub coin_cap: Option<u32>,
    pub score_star_size: (f32, f32),
    pub score_star_value_range: (u32, u32),
    pub score_star_angle_speed: f32,
    pub score_star_speed_x: f32,
    pub heart_size: (f32, f32),
    pub heart_delta_y: (u32, u32),
    pub heart_speed_x: f32,
    pub heart_speed_y: f32,

    // ── Torpedo ──────────────────────────────────────────────────────────────
    pub torpedo_size: (f32, f32),
    pub torpedo_speed_x: f32,
    pub torpedo_speed_y: f32,
    pub torpedo_delta_y: f32,
    pub torpedo_delta_x: i32,
    pub torpedo_target_fraction: f32,
    pub torpedo_blast_side: f32,
    pub torpedo_price: u32,
    pub torpedo_reload: u32,

    // ── Explosions & particles ───────────────────────────────────────────────
    pub explosion_base_side: f32,
    pub plane_explosion_scale: f32,
    pub player_explosion_scale: f32,
    pub particle_side: f32,
    pub particle_drift_y: f32,

    // ── Session ──────────────────────────────────────────────────────────────
    pub game_over_delay: u32,
    pub score_tick_bonus: (u32, u32),

    // ── Spawn schedule ───────────────────────────────────────────────────────
    pub enemy_spawn: SpawnRule,
    pub coin_spawn: SpawnRule,
    pub star_spawn: SpawnRule,
    pub heart_spawn: SpawnRule,
    pub score_tick_period: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            screen_w: SCREEN_WIDTH,
            screen_h: SCREEN_HEIGHT,
            background_speed: BACKGROUND_SPEED,
            player_size: (PLAYER_WIDTH, PLAYER_HEIGHT),
            player_start: (PLAYER_START_X, PLAYER_START_Y),
            player_speed_x_right: PLAYER_SPEED_X_RIGHT,
            player_speed_x_left: PLAYER_SPEED_X_LEFT,
            player_speed_y: PLAYER_SPEED_Y,
            player_reload_time: PLAYER_RELOAD_TIME,
            player_immortal_after_hit: PLAYER_IMMORTAL_AFTER_HIT,
            bullet_size: (BULLET_WIDTH, BULLET_HEIGHT),
            bullet_collide_shrink: BULLET_COLLIDE_SHRINK,
            player_bullet_speed: PLAYER_BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            enemy_size_type_1: ENEMY_SIZE_TYPE_1,
            enemy_size_type_2: ENEMY_SIZE_TYPE_2,
            enemy_speed_x: ENEMY_SPEED_X,
            enemy_speed_y: ENEMY_SPEED_Y,
            enemy_delta_y: ENEMY_DELTA_Y,
            enemy_reload_range: ENEMY_RELOAD_RANGE,
            enemy_cap: ENEMY_CAP,
            enemy_kill_reward: ENEMY_KILL_REWARD,
            coin_size: COIN_SIZE,
            coin_collide_scale: COIN_COLLIDE_SCALE,
            coin_speed_x: COINS_SPEED_X,
            coin_speed_y: COINS_SPEED_Y,
            coin_weights: COIN_WEIGHTS,
            coin_values: COIN_VALUES,
            coin_cap: Some(COIN_CAP),
            score_star_size: SCORE_STAR_SIZE,
            score_star_value_range: SCORE_STAR_VALUE_RANGE,
            score_star_angle_speed: SCORE_STAR_ANGLE_SPEED,
            score_star_speed_x: SCORE_STAR_SPEED_X,
            heart_size: FLYING_HEART_SIZE,
            heart_delta_y: FLYING_HEART_DELTA_Y,
            heart_speed_x: FLYING_HEART_SPEED_X,
            heart_speed_y: FLYING_HEART_SPEED_Y,
            torpedo_size: TORPEDO_SIZE,
            torpedo_speed_x: TORPEDO_SPEED_X,
            torpedo_speed_y: TORPEDO_SPEED_Y,
            torpedo_delta_y: TORPEDO_DELTA_Y,
            torpedo_delta_x: TORPEDO_DELTA_X,
            torpedo_target_fraction: TORPEDO_TARGET_FRACTION,
            torpedo_blast_side: TORPEDO_EXPLOSION_RECT_SIDE,
            torpedo_price: TORPEDO_PRICE,
            torpedo_reload: TORPEDO_TIME_RELOAD,
            explosion_base_side: EXPLOSION_BASE_SIDE,
            plane_explosion_scale: PLANE_EXPLOSION_SIZE_COEFFICIENT,
            player_explosion_scale: PLAYER_EXPLOSION_SIZE_COEFFICIENT,
            particle_side: PARTICLE_SIDE,
            particle_drift_y: PARTICLE_DRIFT_Y,
            game_over_delay: GAME_OVER_DELAY,
            score_tick_bonus: SCORE_TICK_BONUS,
            enemy_spawn: SpawnRule { period: ENEMY_SPAWN_PERIOD, gate: ENEMY_SPAWN_GATE },
            coin_spawn: SpawnRule { period: COIN_SPAWN_PERIOD, gate: COIN_SPAWN_GATE },
            star_spawn: SpawnRule { period: STAR_SPAWN_PERIOD, gate: STAR_SPAWN_GATE },
            heart_spawn: SpawnRule { period: HEART_SPAWN_PERIOD, gate: HEART_SPAWN_GATE },
            score_tick_period: SCORE_TICK_PERIOD,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; keys that are absent keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Startup helper: load `path` if it exists, otherwise (or on a parse
    /// failure) fall back to the compiled defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("no {} found; using compiled defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("loaded game config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("failed to load {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Horizontal detonation line for torpedoes before the random spread.
    pub fn torpedo_target_x(&self) -> f32 {
        (self.screen_w * self.torpedo_target_fraction).floor()
    }

    /// Coin balance after crediting `value`, respecting the optional cap.
    pub fn credit_coins(&self, balance: u32, value: u32) -> u32 {
        let credited = balance.saturating_add(value);
        match self.coin_cap {
            Some(cap) => credited.min(cap),
            None => credited,
        }
    }
}
