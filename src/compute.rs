//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus the configuration and, where needed, an RNG handle) and
//! returns a brand-new `GameState`.  Side effects are limited to the injected
//! RNG; sounds and the record are reported through `GameState::events`.

use rand::Rng;

use crate::collision::resolve;
use crate::config::GameConfig;
use crate::entities::{
    BulletOwner, FrameEvent, FrameInput, GameState, GameStatus, PlayerStats, SpawnTimers,
};
use crate::movers::{
    enemy_can_shoot, enemy_muzzle, new_bullet, new_player, new_torpedo, player_muzzle,
    reset_player, roll_range, sweep_dead, update_all,
};
use crate::spawn::run_scheduler;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session.  `record` is the best score loaded from storage.
pub fn init_state(cfg: &GameConfig, record: u32, rng: &mut impl Rng) -> GameState {
    GameState {
        player: new_player(cfg, rng),
        stats: PlayerStats {
            score: 0,
            coins: 0,
            extra_life: true,
            record,
        },
        enemies: Vec::new(),
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        coins: Vec::new(),
        stars: Vec::new(),
        hearts: Vec::new(),
        torpedoes: Vec::new(),
        explosions: Vec::new(),
        particles: Vec::new(),
        timers: SpawnTimers::from_config(cfg),
        torpedo_reload: 0,
        game_over_countdown: None,
        background_x: 0.0,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    }
}

/// Start over after a game over (or on demand): every transient entity is
/// cleared, the player is re-centred with a new skin, score and coins drop
/// to zero, the extra life comes back and every countdown is re-armed.  The
/// best-score record survives.
pub fn reset(state: &GameState, cfg: &GameConfig, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    reset_in_place(&mut next, cfg, rng);
    next
}

fn reset_in_place(state: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) {
    state.enemies.clear();
    state.player_bullets.clear();
    state.enemy_bullets.clear();
    state.coins.clear();
    state.stars.clear();
    state.hearts.clear();
    state.torpedoes.clear();
    state.explosions.clear();
    state.particles.clear();
    reset_player(&mut state.player, cfg, rng);
    state.stats.score = 0;
    state.stats.coins = 0;
    state.stats.extra_life = true;
    state.timers = SpawnTimers::from_config(cfg);
    state.torpedo_reload = 0;
    state.game_over_countdown = None;
    state.background_x = 0.0;
    state.status = GameStatus::Playing;
    state.frame = 0;
    state.events.clear();
}

/// Leave the pause screen; a finished session stays finished.
pub fn resume(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::Paused {
        next.status = GameStatus::Playing;
    }
    next
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Fire a bullet from the player's nose if the gun has reloaded.
pub fn player_shoot(state: &GameState, cfg: &GameConfig) -> GameState {
    let mut next = state.clone();
    try_shoot(&mut next, cfg);
    next
}

fn try_shoot(state: &mut GameState, cfg: &GameConfig) -> bool {
    if state.player.wrecked || state.player.reload != 0 {
        return false;
    }
    state.player.reload = cfg.player_reload_time;
    let bullet = new_bullet(BulletOwner::Player, player_muzzle(&state.player), cfg);
    state.player_bullets.push(bullet);
    state.events.push(FrameEvent::Shot);
    true
}

/// Launch a torpedo if its reload clock is idle and the player can pay.
pub fn fire_torpedo(state: &GameState, cfg: &GameConfig, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    try_fire_torpedo(&mut next, cfg, rng);
    next
}

fn try_fire_torpedo(state: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) -> bool {
    if state.player.wrecked
        || state.torpedo_reload != 0
        || state.stats.coins < cfg.torpedo_price
    {
        return false;
    }
    state.stats.coins -= cfg.torpedo_price;
    state.torpedo_reload = cfg.torpedo_reload;
    let torpedo = new_torpedo(player_muzzle(&state.player), cfg, rng);
    state.torpedoes.push(torpedo);
    state.events.push(FrameEvent::TorpedoLaunch);
    log::debug!("torpedo launched at frame {}, {} coins left", state.frame, state.stats.coins);
    true
}

fn enemies_fire(state: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) {
    for enemy in state.enemies.iter_mut().filter(|e| enemy_can_shoot(e)) {
        state.enemy_bullets.push(new_bullet(BulletOwner::Enemy, enemy_muzzle(enemy), cfg));
        enemy.reload = roll_range(rng, cfg.enemy_reload_range);
    }
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Only a `Playing` session advances.  A pause request freezes the session
/// before anything moves; the flow controller resumes it with [`resume`].
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    cfg: &GameConfig,
    rng: &mut impl Rng,
) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    if next.status != GameStatus::Playing {
        return next;
    }
    if input.pause && next.game_over_countdown.is_none() {
        next.status = GameStatus::Paused;
        return next;
    }

    next.frame += 1;

    // ── 1. Background ────────────────────────────────────────────────────────
    next.background_x = (next.background_x + cfg.background_speed).rem_euclid(cfg.screen_w);

    // ── 2. Weapons ───────────────────────────────────────────────────────────
    next.torpedo_reload = next.torpedo_reload.saturating_sub(1);
    if input.held.fire {
        try_shoot(&mut next, cfg);
    }
    if input.torpedo {
        try_fire_torpedo(&mut next, cfg, rng);
    }
    enemies_fire(&mut next, cfg, rng);

    // ── 3. Spawning ──────────────────────────────────────────────────────────
    run_scheduler(&mut next, cfg, rng);

    // ── 4. Motion & animation ────────────────────────────────────────────────
    update_all(&mut next, &input.held, cfg);

    // ── 5. Collisions ────────────────────────────────────────────────────────
    resolve(&mut next, cfg, rng);
    sweep_dead(&mut next);

    // ── 6. Session end ───────────────────────────────────────────────────────
    advance_game_over(&mut next);

    next
}

fn advance_game_over(state: &mut GameState) {
    let Some(remaining) = state.game_over_countdown else {
        return;
    };
    let remaining = remaining.saturating_sub(1);
    state.game_over_countdown = Some(remaining);
    if remaining > 0 {
        return;
    }

    state.status = GameStatus::GameOver;
    state.events.push(FrameEvent::GameOver);
    if state.stats.score > state.stats.record {
        state.stats.record = state.stats.score;
        state.events.push(FrameEvent::NewRecord(state.stats.score));
        log::info!("new record: {}", state.stats.score);
    }
    log::debug!("game over at frame {} with score {}", state.frame, state.stats.score);
}
