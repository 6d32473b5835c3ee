//! Once-per-frame hit resolution.
//!
//! Runs after every entity has moved.  The passes execute in a fixed order
//! and each one sees the outcome of the ones before it:
//!
//! 1. player bullets × enemies (first enemy found per bullet)
//! 2. ready torpedoes × enemies (every enemy inside the blast square)
//! 3. enemies still off-screen (immortal) are dropped from the kill list
//! 4. surviving kills are removed, rewarded and replaced by explosions
//! 5. enemy bullets, then enemy planes × a vulnerable player
//! 6. pickups × player
//!
//! All tests use the entities' collision rectangles, never their sprites.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Bullet, Coin, EnemyPlane, FlyingHeart, FrameEvent, GameState, PlayerPlane, ScoreStar, Torpedo,
};
use crate::geometry::Rect;
use crate::movers::{
    new_explosion, new_particle, roll_range, torpedo_blast_rect, torpedo_ready_to_explode,
};

/// Anything that takes part in hit-testing.
pub trait Collider {
    fn collide_rect(&self) -> Rect;

    fn collides_with(&self, other: &impl Collider) -> bool {
        self.collide_rect().intersects(&other.collide_rect())
    }
}

macro_rules! impl_collider {
    ($($ty:ty),*) => {
        $(impl Collider for $ty {
            fn collide_rect(&self) -> Rect {
                self.collide_rect
            }
        })*
    };
}

impl_collider!(PlayerPlane, EnemyPlane, Bullet, Coin, ScoreStar, FlyingHeart, Torpedo);

impl Collider for Rect {
    fn collide_rect(&self) -> Rect {
        *self
    }
}

/// What happened to the player this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerHit {
    Unharmed,
    /// The extra life absorbed the hit.
    Shielded,
    /// No extra life left: the game-over countdown is now armed.
    Downed,
}

pub fn resolve(state: &mut GameState, cfg: &GameConfig, rng: &mut impl Rng) -> PlayerHit {
    let mut pending = bullets_vs_enemies(state);
    torpedoes_vs_enemies(state, cfg, &mut pending);
    pending.retain(|&i| !state.enemies[i].is_immortal);
    destroy_enemies(state, &pending, cfg, rng);

    let hit = if can_be_hit(&state.player, state.game_over_countdown) {
        hostile_vs_player(state, cfg)
    } else {
        PlayerHit::Unharmed
    };
    pickups_vs_player(state, cfg);
    hit
}

fn bullets_vs_enemies(state: &mut GameState) -> Vec<usize> {
    let mut pending: Vec<usize> = Vec::new();
    for bullet in state.player_bullets.iter_mut().filter(|b| b.alive) {
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(i, e)| e.alive && !pending.contains(i) && bullet.collides_with(*e))
            .map(|(i, _)| i);
        if let Some(i) = target {
            bullet.alive = false;
            pending.push(i);
        }
    }
    pending
}

fn torpedoes_vs_enemies(state: &mut GameState, cfg: &GameConfig, pending: &mut Vec<usize>) {
    for torpedo in state.torpedoes.iter_mut().filter(|t| t.alive) {
        if !torpedo_ready_to_explode(torpedo) {
            continue;
        }
        let blast = torpedo_blast_rect(torpedo, cfg);
        for (i, enemy) in state.enemies.iter().enumerate() {
            if enemy.alive && !pending.contains(&i) && enemy.collides_with(&blast) {
                pending.push(i);
            }
        }
        torpedo.alive = false;
        state.explosions.push(new_explosion(blast.center(), cfg.torpedo_blast_side));
        state.events.push(FrameEvent::Explosion);
    }
}

fn destroy_enemies(state: &mut GameState, killed: &[usize], cfg: &GameConfig, rng: &mut impl Rng) {
    let side = cfg.explosion_base_side * cfg.plane_explosion_scale;
    for &i in killed {
        let enemy = &mut state.enemies[i];
        enemy.alive = false;
        let center = enemy.collide_rect.center();
        let reward = roll_range(rng, cfg.enemy_kill_reward);
        state.stats.score = state.stats.score.saturating_add(reward);
        state.explosions.push(new_explosion(center, side));
        state.events.push(FrameEvent::Explosion);
    }
}

pub fn can_be_hit(player: &PlayerPlane, game_over_countdown: Option<u32>) -> bool {
    !player.wrecked && player.immortal_timer == 0 && game_over_countdown.is_none()
}

fn hostile_vs_player(state: &mut GameState, cfg: &GameConfig) -> PlayerHit {
    let player = &state.player;
    let by_bullet = state
        .enemy_bullets
        .iter_mut()
        .find(|b| b.alive && b.collides_with(player));
    let struck = match by_bullet {
        Some(bullet) => {
            bullet.alive = false;
            true
        }
        None => state
            .enemies
            .iter()
            .any(|e| e.alive && e.collides_with(player)),
    };
    if !struck {
        return PlayerHit::Unharmed;
    }

    let side = cfg.explosion_base_side * cfg.player_explosion_scale;
    state.explosions.push(new_explosion(state.player.rect.center(), side));
    state.events.push(FrameEvent::Explosion);

    if state.stats.extra_life {
        state.stats.extra_life = false;
        state.player.immortal_timer = cfg.player_immortal_after_hit;
        state.events.push(FrameEvent::ExtraLifeLost);
        log::debug!("extra life consumed at frame {}", state.frame);
        PlayerHit::Shielded
    } else {
        state.player.wrecked = true;
        state.game_over_countdown = Some(cfg.game_over_delay);
        log::debug!("player downed at frame {}, score {}", state.frame, state.stats.score);
        PlayerHit::Downed
    }
}

/// Coins and stars are collected whatever the player's invulnerability; a
/// heart only while the extra life is missing.
fn pickups_vs_player(state: &mut GameState, cfg: &GameConfig) {
    if state.player.wrecked {
        return;
    }
    let player = &state.player;

    for coin in state.coins.iter_mut().filter(|c| c.alive && c.collides_with(player)) {
        coin.alive = false;
        state.stats.coins = cfg.credit_coins(state.stats.coins, coin.value);
        state.particles.push(new_particle(coin.rect.center(), cfg));
        state.events.push(FrameEvent::Pickup);
    }
    for star in state.stars.iter_mut().filter(|s| s.alive && s.collides_with(player)) {
        star.alive = false;
        state.stats.score = state.stats.score.saturating_add(star.value);
        state.particles.push(new_particle(star.rect.center(), cfg));
        state.events.push(FrameEvent::Pickup);
    }
    for heart in state.hearts.iter_mut().filter(|h| h.alive) {
        if state.stats.extra_life || !heart.collides_with(player) {
            continue;
        }
        heart.alive = false;
        state.stats.extra_life = true;
        state.particles.push(new_particle(heart.rect.center(), cfg));
        state.events.push(FrameEvent::Pickup);
    }
}
