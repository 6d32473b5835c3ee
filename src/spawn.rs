//! Frame-counted spawning.
//!
//! Five independent countdowns (enemy, coin, star, heart, score tick) tick
//! down once per simulated frame.  When one runs out it is re-armed with its
//! period and a spawn opportunity arises; all but the score tick then pass a
//! `1 / gate` random draw before anything appears.

use rand::Rng;

use crate::config::{GameConfig, SpawnRule};
use crate::entities::{GameState, SpawnTimer, SpawnTimers};
use crate::movers::{new_coin, new_enemy, new_heart, new_star, roll_range};

/// Which categories had their countdown expire this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpawnOpportunities {
    pub enemy: bool,
    pub coin: bool,
    pub star: bool,
    pub heart: bool,
    pub score_tick: bool,
}

impl SpawnTimer {
    pub fn new(period: u32) -> Self {
        SpawnTimer { remaining: period, period }
    }

    /// Count one frame down; on expiry re-arm and report `true`.
    pub fn advance(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }
}

impl SpawnTimers {
    pub fn from_config(cfg: &GameConfig) -> Self {
        SpawnTimers {
            enemy: SpawnTimer::new(cfg.enemy_spawn.period),
            coin: SpawnTimer::new(cfg.coin_spawn.period),
            star: SpawnTimer::new(cfg.star_spawn.period),
            heart: SpawnTimer::new(cfg.heart_spawn.period),
            score_tick: SpawnTimer::new(cfg.score_tick_period),
        }
    }

    /// Advance every countdown by one frame, unconditionally.
    pub fn advance(&mut self) -> SpawnOpportunities {
        SpawnOpportunities {
            enemy: self.enemy.advance(),
            coin: self.coin.advance(),
            star: self.star.advance(),
            heart: self.heart.advance(),
            score_tick: self.score_tick.advance(),
        }
    }
}

/// Uniform draw in `[0, gate)`; only a zero lets the spawn through.
pub fn passes_gate(rule: &SpawnRule, rng: &mut impl Rng) -> bool {
    rng.gen_range(0..rule.gate.max(1)) == 0
}

/// Run one frame of the scheduler against the session.
///
/// Countdowns always advance.  While the game-over countdown is armed the
/// opportunities are discarded: nothing new appears and the score no longer
/// ticks.
pub fn run_scheduler(state: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) {
    let due = state.timers.advance();
    if state.game_over_countdown.is_some() {
        return;
    }

    if due.enemy && passes_gate(&cfg.enemy_spawn, rng) && state.enemies.len() < cfg.enemy_cap {
        state.enemies.push(new_enemy(cfg, rng));
    }
    if due.coin && passes_gate(&cfg.coin_spawn, rng) {
        state.coins.push(new_coin(cfg, rng));
    }
    if due.star && passes_gate(&cfg.star_spawn, rng) {
        state.stars.push(new_star(cfg, rng));
    }
    if due.heart && passes_gate(&cfg.heart_spawn, rng) {
        state.hearts.push(new_heart(cfg, rng));
    }
    if due.score_tick {
        let bonus = roll_range(rng, cfg.score_tick_bonus);
        state.stats.score = state.stats.score.saturating_add(bonus);
    }
}
