//! Compile-time defaults.  `GameConfig::default()` is built from these; a
//! `fly_rush.toml` can override any subset at startup.
//!
//! All distances are in playfield pixels, all durations in frames.

// ── Clock & playfield ─────────────────────────────────────────────────────────

pub const FPS: u32 = 60;
pub const SCREEN_WIDTH: f32 = 1413.0;
pub const SCREEN_HEIGHT: f32 = 768.0;
pub const BACKGROUND_SPEED: f32 = 2.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 96.0;
pub const PLAYER_HEIGHT: f32 = 54.0;
pub const PLAYER_START_X: f32 = 200.0;
pub const PLAYER_START_Y: f32 = 384.0;
/// Rightward is faster than leftward.
pub const PLAYER_SPEED_X_RIGHT: f32 = 7.0;
pub const PLAYER_SPEED_X_LEFT: f32 = 5.0;
pub const PLAYER_SPEED_Y: f32 = 6.0;
pub const PLAYER_RELOAD_TIME: u32 = 15;
pub const PLAYER_IMMORTAL_AFTER_HIT: u32 = 120;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: f32 = 32.0;
pub const BULLET_HEIGHT: f32 = 12.0;
/// Collision rect = display rect shrunk by this much on each axis (total).
pub const BULLET_COLLIDE_SHRINK: (f32, f32) = (10.0, 5.0);
pub const PLAYER_BULLET_SPEED: f32 = 14.0;
pub const ENEMY_BULLET_SPEED: f32 = 9.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE_TYPE_1: (f32, f32) = (96.0, 54.0);
pub const ENEMY_SIZE_TYPE_2: (f32, f32) = (120.0, 66.0);
pub const ENEMY_SPEED_X: f32 = 4.0;
pub const ENEMY_SPEED_Y: f32 = 2.0;
pub const ENEMY_DELTA_Y: (u32, u32) = (40, 120);
pub const ENEMY_RELOAD_RANGE: (u32, u32) = (60, 150);
pub const ENEMY_CAP: usize = 16;
pub const ENEMY_KILL_REWARD: (u32, u32) = (20, 50);

// ── Pickups ───────────────────────────────────────────────────────────────────

pub const COIN_SIZE: (f32, f32) = (40.0, 40.0);
pub const COIN_COLLIDE_SCALE: (f32, f32) = (0.43, 0.38);
pub const COINS_SPEED_X: f32 = 3.0;
pub const COINS_SPEED_Y: f32 = 2.0;
/// Draw weights for bronze, silver, gold.
pub const COIN_WEIGHTS: [u32; 3] = [6, 4, 2];
pub const COIN_VALUES: [u32; 3] = [1, 3, 5];
pub const COIN_CAP: u32 = 9999;

pub const SCORE_STAR_SIZE: (f32, f32) = (44.0, 44.0);
pub const SCORE_STAR_VALUE_RANGE: (u32, u32) = (80, 150);
/// Degrees per frame.
pub const SCORE_STAR_ANGLE_SPEED: f32 = 3.0;
pub const SCORE_STAR_SPEED_X: f32 = 3.0;

pub const FLYING_HEART_SIZE: (f32, f32) = (40.0, 36.0);
pub const FLYING_HEART_DELTA_Y: (u32, u32) = (30, 90);
pub const FLYING_HEART_SPEED_X: f32 = 2.0;
pub const FLYING_HEART_SPEED_Y: f32 = 1.0;

// ── Torpedo ───────────────────────────────────────────────────────────────────

pub const TORPEDO_SIZE: (f32, f32) = (60.0, 20.0);
pub const TORPEDO_SPEED_X: f32 = 8.0;
pub const TORPEDO_SPEED_Y: f32 = 3.0;
pub const TORPEDO_DELTA_Y: f32 = 40.0;
/// Random spread around the 85 % screen-width detonation line.
pub const TORPEDO_DELTA_X: i32 = 60;
pub const TORPEDO_TARGET_FRACTION: f32 = 0.85;
pub const TORPEDO_EXPLOSION_RECT_SIDE: f32 = 400.0;
pub const TORPEDO_PRICE: u32 = 10;
pub const TORPEDO_TIME_RELOAD: u32 = 600;

// ── Explosions & particles ────────────────────────────────────────────────────

pub const EXPLOSION_BASE_SIDE: f32 = 100.0;
pub const PLANE_EXPLOSION_SIZE_COEFFICIENT: f32 = 1.0;
pub const PLAYER_EXPLOSION_SIZE_COEFFICIENT: f32 = 1.2;
pub const EXPLOSION_IMAGES: u32 = 9;
pub const EXPLOSION_STEPS: u32 = 18;
pub const PARTICLE_SIDE: f32 = 30.0;
pub const PARTICLE_IMAGES: u32 = 15;
pub const PARTICLE_STEPS: u32 = 30;
pub const PARTICLE_DRIFT_Y: f32 = 4.5;

// ── Session ───────────────────────────────────────────────────────────────────

pub const GAME_OVER_DELAY: u32 = 40;
pub const SCORE_TICK_BONUS: (u32, u32) = (2, 5);

// ── Spawn schedule (period in frames, gate denominator) ───────────────────────

pub const ENEMY_SPAWN_PERIOD: u32 = 60;
pub const ENEMY_SPAWN_GATE: u32 = 2;
pub const COIN_SPAWN_PERIOD: u32 = 360;
pub const COIN_SPAWN_GATE: u32 = 1;
pub const STAR_SPAWN_PERIOD: u32 = 360;
pub const STAR_SPAWN_GATE: u32 = 1;
pub const HEART_SPAWN_PERIOD: u32 = 480;
pub const HEART_SPAWN_GATE: u32 = 1;
pub const SCORE_TICK_PERIOD: u32 = 60;

// ── Persistence ───────────────────────────────────────────────────────────────

pub const RECORD_KEY: &str = "record";
