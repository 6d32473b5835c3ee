//! Per-kind construction and update rules.
//!
//! Each entity kind has a constructor (taking the injected RNG where the
//! kind rolls dice) and an `update_*` function that advances it by exactly
//! one frame: animation first, then motion, then the collision rectangle is
//! re-derived from the display rectangle.  Nothing here looks at other
//! entities; cross-entity consequences live in `collision`.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Bullet, BulletOwner, Coin, CoinKind, EnemyPlane, Explosion, FlyingHeart, GameState, HeldKeys,
    Particle, PlaneType, PlayerPlane, ScoreStar, Skin, Torpedo,
};
use crate::geometry::Rect;

const COIN_FRAMES: f32 = 15.0;
const HEART_CYCLE: u32 = 75;
const HEART_STEPS_PER_IMAGE: u32 = 15;
const TORPEDO_CYCLE: u32 = 15;
const TORPEDO_STEPS_PER_IMAGE: u32 = 5;

// ── Random helpers ────────────────────────────────────────────────────────────

fn random_sign(rng: &mut impl Rng, value: f32) -> f32 {
    if rng.gen_bool(0.5) {
        value
    } else {
        -value
    }
}

fn random_skin(rng: &mut impl Rng) -> Skin {
    Skin::ALL[rng.gen_range(0..Skin::ALL.len())]
}

/// Inclusive integer roll; a degenerate range yields its lower bound.
pub fn roll_range(rng: &mut impl Rng, (lo, hi): (u32, u32)) -> u32 {
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Random whole-pixel coordinate in `[lo, hi]`.
fn range_px(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = (lo.floor() as i32, hi.floor() as i32);
    if hi <= lo {
        lo as f32
    } else {
        rng.gen_range(lo..=hi) as f32
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Planes hit-test with a box narrower than the sprite and shifted down a
/// little, so wing tips and tail fins don't count.
pub fn plane_collide_rect(rect: &Rect, plane_type: PlaneType) -> Rect {
    let (y_scale, y_offset) = match plane_type {
        PlaneType::Light => (0.62, 0.08),
        PlaneType::Heavy => (0.75, 0.04),
    };
    let mut collide = rect.scaled(0.70, y_scale);
    collide.set_center((rect.center_x(), rect.center_y() + rect.w * y_offset));
    collide
}

pub fn new_player(cfg: &GameConfig, rng: &mut impl Rng) -> PlayerPlane {
    let rect = Rect::from_center(cfg.player_start, cfg.player_size.0, cfg.player_size.1);
    PlayerPlane {
        rect,
        collide_rect: plane_collide_rect(&rect, PlaneType::Light),
        skin: random_skin(rng),
        reload: 0,
        immortal_timer: 0,
        wrecked: false,
    }
}

/// Put the player back at the start with a fresh skin and no timers.
pub fn reset_player(player: &mut PlayerPlane, cfg: &GameConfig, rng: &mut impl Rng) {
    *player = new_player(cfg, rng);
}

pub fn update_player(player: &mut PlayerPlane, keys: &HeldKeys, cfg: &GameConfig) {
    player.immortal_timer = player.immortal_timer.saturating_sub(1);
    player.reload = player.reload.saturating_sub(1);
    if player.wrecked {
        return;
    }

    let r = &mut player.rect;
    if keys.up {
        r.set_top((r.top() - cfg.player_speed_y).max(0.0));
    }
    if keys.down {
        r.set_bottom((r.bottom() + cfg.player_speed_y).min(cfg.screen_h));
    }
    if keys.right {
        r.set_right((r.right() + cfg.player_speed_x_right).min(cfg.screen_w));
    }
    if keys.left {
        r.set_left((r.left() - cfg.player_speed_x_left).max(0.0));
    }
    clamp_to_screen(r, cfg);
    player.collide_rect = plane_collide_rect(&player.rect, PlaneType::Light);
}

fn clamp_to_screen(r: &mut Rect, cfg: &GameConfig) {
    r.set_left(r.left().min(cfg.screen_w - r.w).max(0.0));
    r.set_top(r.top().min(cfg.screen_h - r.h).max(0.0));
}

/// Where a player bullet appears: the forward edge of the collision box.
pub fn player_muzzle(player: &PlayerPlane) -> (f32, f32) {
    (player.collide_rect.right(), player.collide_rect.center_y())
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

pub fn new_enemy(cfg: &GameConfig, rng: &mut impl Rng) -> EnemyPlane {
    let plane_type = if rng.gen_bool(0.5) { PlaneType::Light } else { PlaneType::Heavy };
    let (w, h) = match plane_type {
        PlaneType::Light => cfg.enemy_size_type_1,
        PlaneType::Heavy => cfg.enemy_size_type_2,
    };
    let skin = random_skin(rng);
    let x = range_px(rng, cfg.screen_w, cfg.screen_w + w * 3.0);
    let y = range_px(rng, 0.0, cfg.screen_h - h);
    let rect = Rect::new(x, y, w, h);
    let right_target_x = range_px(rng, cfg.screen_w - w * 3.0, cfg.screen_w);
    let speed_y = random_sign(rng, cfg.enemy_speed_y);
    let delta_y = roll_range(rng, cfg.enemy_delta_y) as f32;

    EnemyPlane {
        plane_type,
        skin,
        rect,
        collide_rect: plane_collide_rect(&rect, plane_type),
        right_target_x,
        start_top: y,
        delta_y,
        speed_y,
        reload: 0,
        is_immortal: true,
        alive: true,
    }
}

/// Approach from the right until the target line, then bob up and down
/// around the spawn height without moving horizontally again.
pub fn update_enemy(enemy: &mut EnemyPlane, cfg: &GameConfig) {
    enemy.reload = enemy.reload.saturating_sub(1);

    let r = &mut enemy.rect;
    if r.right() >= enemy.right_target_x {
        r.x -= cfg.enemy_speed_x;
    } else {
        r.y += enemy.speed_y;
        if enemy.speed_y > 0.0 {
            if r.bottom() >= cfg.screen_h {
                r.set_bottom(cfg.screen_h);
                enemy.speed_y = -enemy.speed_y;
            } else if r.bottom() >= enemy.start_top + r.h + enemy.delta_y {
                enemy.speed_y = -enemy.speed_y;
            }
        } else if r.top() <= 0.0 {
            r.set_top(0.0);
            enemy.speed_y = -enemy.speed_y;
        } else if r.top() <= enemy.start_top - enemy.delta_y {
            enemy.speed_y = -enemy.speed_y;
        }
    }
    enemy.collide_rect = plane_collide_rect(&enemy.rect, enemy.plane_type);

    if enemy.is_immortal && enemy.rect.center_x() <= cfg.screen_w {
        enemy.is_immortal = false;
    }
}

pub fn enemy_can_shoot(enemy: &EnemyPlane) -> bool {
    enemy.reload == 0 && enemy.rect.right() <= enemy.right_target_x
}

pub fn enemy_muzzle(enemy: &EnemyPlane) -> (f32, f32) {
    (enemy.collide_rect.left(), enemy.collide_rect.center_y())
}

// ── Bullets ───────────────────────────────────────────────────────────────────

pub fn new_bullet(owner: BulletOwner, (x, y): (f32, f32), cfg: &GameConfig) -> Bullet {
    let (w, h) = cfg.bullet_size;
    let mut rect = Rect::new(0.0, 0.0, w, h);
    rect.set_center_y(y);
    let speed = match owner {
        BulletOwner::Player => {
            rect.set_left(x);
            cfg.player_bullet_speed
        }
        BulletOwner::Enemy => {
            rect.set_right(x);
            -cfg.enemy_bullet_speed
        }
    };
    Bullet {
        rect,
        collide_rect: bullet_collide_rect(&rect, cfg),
        owner,
        speed,
        alive: true,
    }
}

pub fn bullet_collide_rect(rect: &Rect, cfg: &GameConfig) -> Rect {
    let (dw, dh) = cfg.bullet_collide_shrink;
    rect.inflated(-dw, -dh)
}

pub fn update_bullet(bullet: &mut Bullet, cfg: &GameConfig) {
    bullet.rect.x += bullet.speed;
    bullet.collide_rect.set_center(bullet.rect.center());
    if bullet.rect.right() <= 0.0 || bullet.rect.left() >= cfg.screen_w {
        bullet.alive = false;
    }
}

// ── Pickups ───────────────────────────────────────────────────────────────────

/// Pickups enter at the right edge at a random height.
fn pickup_rect(size: (f32, f32), cfg: &GameConfig, rng: &mut impl Rng) -> Rect {
    let top = range_px(rng, 0.0, cfg.screen_h - size.1);
    Rect::new(cfg.screen_w, top, size.0, size.1)
}

pub fn new_coin(cfg: &GameConfig, rng: &mut impl Rng) -> Coin {
    let kind = match WeightedIndex::new(cfg.coin_weights) {
        Ok(dist) => CoinKind::ALL[dist.sample(rng)],
        Err(_) => CoinKind::Bronze,
    };
    let rect = pickup_rect(cfg.coin_size, cfg, rng);
    Coin {
        kind,
        value: cfg.coin_values[kind.index()],
        rect,
        collide_rect: coin_collide_rect(&rect, cfg),
        phase: 0.0,
        alive: true,
    }
}

pub fn coin_collide_rect(rect: &Rect, cfg: &GameConfig) -> Rect {
    rect.scaled(cfg.coin_collide_scale.0, cfg.coin_collide_scale.1)
}

/// Coins spin through 15 frames twice a second; the spin phase also picks
/// whether the coin is currently rising or falling.
pub fn update_coin(coin: &mut Coin, cfg: &GameConfig) {
    coin.phase += COIN_FRAMES / (cfg.fps as f32 * 0.5);
    if coin.phase >= COIN_FRAMES {
        coin.phase -= COIN_FRAMES;
    }
    debug_assert!((0.0..COIN_FRAMES).contains(&coin.phase));

    let frame = coin.phase as u32;
    let r = &mut coin.rect;
    if frame >= 10 || frame <= 2 {
        r.set_top((r.top() - cfg.coin_speed_y).max(0.0));
    } else {
        r.set_bottom((r.bottom() + cfg.coin_speed_y).min(cfg.screen_h));
    }
    r.x -= cfg.coin_speed_x;
    coin.collide_rect.set_center(coin.rect.center());
    if coin.rect.right() <= 0.0 {
        coin.alive = false;
    }
}

pub fn new_star(cfg: &GameConfig, rng: &mut impl Rng) -> ScoreStar {
    let angle_speed = random_sign(rng, cfg.score_star_angle_speed);
    let value = roll_range(rng, cfg.score_star_value_range);
    let rect = pickup_rect(cfg.score_star_size, cfg, rng);
    ScoreStar {
        value,
        size: cfg.score_star_size,
        rect,
        collide_rect: rect,
        angle: 0.0,
        angle_speed,
        alive: true,
    }
}

/// Rotating the image changes its bounding box but never its centre; the
/// collision box keeps the unrotated size.
pub fn update_star(star: &mut ScoreStar, cfg: &GameConfig) {
    let upright = Rect::from_center(star.rect.center(), star.size.0, star.size.1);
    star.rect = upright.rotated_bounds(star.angle);
    star.angle = (star.angle + star.angle_speed).rem_euclid(360.0);
    star.rect.x -= cfg.score_star_speed_x;
    star.collide_rect.set_center(star.rect.center());
    if star.rect.right() <= 0.0 {
        star.alive = false;
    }
}

pub fn new_heart(cfg: &GameConfig, rng: &mut impl Rng) -> FlyingHeart {
    let rect = pickup_rect(cfg.heart_size, cfg, rng);
    let delta_y = roll_range(rng, cfg.heart_delta_y) as f32;
    let speed_y = random_sign(rng, cfg.heart_speed_y);
    FlyingHeart {
        rect,
        collide_rect: rect,
        step: 0,
        start_center_y: rect.center_y(),
        delta_y,
        speed_y,
        alive: true,
    }
}

pub fn update_heart(heart: &mut FlyingHeart, cfg: &GameConfig) {
    heart.step = (heart.step + 1) % HEART_CYCLE;

    let r = &mut heart.rect;
    r.x -= cfg.heart_speed_x;
    r.y += heart.speed_y;
    let off_band = (r.center_y() - heart.start_center_y).abs() > heart.delta_y;
    if off_band || r.top() < 0.0 || r.bottom() > cfg.screen_h {
        let edge = if heart.speed_y > 0.0 {
            heart.start_center_y + heart.delta_y
        } else {
            heart.start_center_y - heart.delta_y
        };
        if off_band {
            r.set_center_y(edge);
        }
        r.set_top(r.top().max(0.0));
        r.set_bottom(r.bottom().min(cfg.screen_h));
        heart.speed_y = -heart.speed_y;
    }
    heart.collide_rect.set_center(heart.rect.center());
    if heart.rect.right() <= 0.0 {
        heart.alive = false;
    }
}

pub fn heart_image(heart: &FlyingHeart) -> u32 {
    heart.step / HEART_STEPS_PER_IMAGE
}

// ── Torpedo ───────────────────────────────────────────────────────────────────

/// Launched with its left edge at `x`, vertically centred on `y`.
pub fn new_torpedo((x, y): (f32, f32), cfg: &GameConfig, rng: &mut impl Rng) -> Torpedo {
    let (w, h) = cfg.torpedo_size;
    let mut rect = Rect::new(x, 0.0, w, h);
    rect.set_center_y(y);
    let spread = if cfg.torpedo_delta_x > 0 {
        rng.gen_range(-cfg.torpedo_delta_x..=cfg.torpedo_delta_x)
    } else {
        0
    };
    Torpedo {
        rect,
        collide_rect: rect,
        target_center_x: cfg.torpedo_target_x() + spread as f32,
        start_center_y: rect.center_y(),
        speed_y: random_sign(rng, cfg.torpedo_speed_y),
        step: 0,
        alive: true,
    }
}

pub fn update_torpedo(torpedo: &mut Torpedo, cfg: &GameConfig) {
    torpedo.step = (torpedo.step + 1) % TORPEDO_CYCLE;

    let r = &mut torpedo.rect;
    r.x += cfg.torpedo_speed_x;
    r.y += torpedo.speed_y;
    if (torpedo.start_center_y - r.center_y()).abs() > cfg.torpedo_delta_y
        || r.top() < 0.0
        || r.bottom() > cfg.screen_h
    {
        let edge = if torpedo.speed_y > 0.0 {
            torpedo.start_center_y + cfg.torpedo_delta_y
        } else {
            torpedo.start_center_y - cfg.torpedo_delta_y
        };
        r.set_center_y(edge);
        r.set_top(r.top().max(0.0));
        r.set_bottom(r.bottom().min(cfg.screen_h));
        torpedo.speed_y = -torpedo.speed_y;
    }
    torpedo.collide_rect.set_center(torpedo.rect.center());
    if torpedo.rect.left() >= cfg.screen_w {
        torpedo.alive = false;
    }
}

pub fn torpedo_image(torpedo: &Torpedo) -> u32 {
    torpedo.step / TORPEDO_STEPS_PER_IMAGE
}

pub fn torpedo_ready_to_explode(torpedo: &Torpedo) -> bool {
    torpedo.rect.center_x() >= torpedo.target_center_x
}

/// Square damage region centred on the torpedo, independent of its sprite.
pub fn torpedo_blast_rect(torpedo: &Torpedo, cfg: &GameConfig) -> Rect {
    Rect::from_center(torpedo.rect.center(), cfg.torpedo_blast_side, cfg.torpedo_blast_side)
}

// ── Explosions & particles ────────────────────────────────────────────────────

pub fn new_explosion(center: (f32, f32), side: f32) -> Explosion {
    Explosion {
        rect: Rect::from_center(center, side, side),
        step: 0,
        image: 0,
        alive: true,
    }
}

/// 18 steps over 9 images, then gone.
pub fn update_explosion(explosion: &mut Explosion) {
    use crate::constants::{EXPLOSION_IMAGES, EXPLOSION_STEPS};

    if explosion.step < EXPLOSION_STEPS {
        explosion.image = explosion.step * EXPLOSION_IMAGES / EXPLOSION_STEPS;
        explosion.step += 1;
    } else {
        explosion.alive = false;
    }
    debug_assert!(explosion.image < EXPLOSION_IMAGES);
}

pub fn new_particle(center: (f32, f32), cfg: &GameConfig) -> Particle {
    Particle {
        rect: Rect::from_center(center, cfg.particle_side, cfg.particle_side),
        step: 0,
        image: 0,
        alive: true,
    }
}

/// 30 steps over 15 images while sinking.
pub fn update_particle(particle: &mut Particle, cfg: &GameConfig) {
    use crate::constants::{PARTICLE_IMAGES, PARTICLE_STEPS};

    if particle.step < PARTICLE_STEPS {
        particle.image = particle.step * PARTICLE_IMAGES / PARTICLE_STEPS;
        particle.step += 1;
        particle.rect.y += cfg.particle_drift_y;
    } else {
        particle.alive = false;
    }
    debug_assert!(particle.image < PARTICLE_IMAGES);
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Advance every entity by one frame and drop the ones that expired on
/// their own (off-screen, animation finished).
pub fn update_all(state: &mut GameState, keys: &HeldKeys, cfg: &GameConfig) {
    update_player(&mut state.player, keys, cfg);
    state.enemies.iter_mut().for_each(|e| update_enemy(e, cfg));
    state.coins.iter_mut().for_each(|c| update_coin(c, cfg));
    state.stars.iter_mut().for_each(|s| update_star(s, cfg));
    state.hearts.iter_mut().for_each(|h| update_heart(h, cfg));
    state.player_bullets.iter_mut().for_each(|b| update_bullet(b, cfg));
    state.enemy_bullets.iter_mut().for_each(|b| update_bullet(b, cfg));
    state.torpedoes.iter_mut().for_each(|t| update_torpedo(t, cfg));
    state.explosions.iter_mut().for_each(update_explosion);
    state.particles.iter_mut().for_each(|p| update_particle(p, cfg));
    sweep_dead(state);
}

pub fn sweep_dead(state: &mut GameState) {
    state.enemies.retain(|e| e.alive);
    state.coins.retain(|c| c.alive);
    state.stars.retain(|s| s.alive);
    state.hearts.retain(|h| h.alive);
    state.player_bullets.retain(|b| b.alive);
    state.enemy_bullets.retain(|b| b.alive);
    state.torpedoes.retain(|t| t.alive);
    state.explosions.retain(|e| e.alive);
    state.particles.retain(|p| p.alive);
}
