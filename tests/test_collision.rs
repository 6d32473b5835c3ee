use approx::assert_relative_eq;
use fly_rush::collision::*;
use fly_rush::compute::init_state;
use fly_rush::config::GameConfig;
use fly_rush::entities::*;
use fly_rush::geometry::Rect;
use fly_rush::movers::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state(cfg: &GameConfig) -> GameState {
    init_state(cfg, 0, &mut seeded_rng())
}

/// An on-screen, hittable enemy centred on `center`.
fn enemy_at(cfg: &GameConfig, center: (f32, f32)) -> EnemyPlane {
    let mut e = new_enemy(cfg, &mut seeded_rng());
    e.rect = Rect::from_center(center, e.rect.w, e.rect.h);
    e.collide_rect = plane_collide_rect(&e.rect, e.plane_type);
    e.is_immortal = false;
    e
}

/// A player bullet whose hit box sits on `target`'s centre.
fn bullet_on(cfg: &GameConfig, target: &Rect) -> Bullet {
    let (cx, cy) = target.center();
    new_bullet(BulletOwner::Player, (cx - cfg.bullet_size.0 / 2.0, cy), cfg)
}

fn enemy_bullet_on_player(state: &GameState, cfg: &GameConfig) -> Bullet {
    let (cx, cy) = state.player.collide_rect.center();
    new_bullet(BulletOwner::Enemy, (cx + cfg.bullet_size.0 / 2.0, cy), cfg)
}

fn pickup_rect_on_player(state: &GameState, size: (f32, f32)) -> Rect {
    Rect::from_center(state.player.collide_rect.center(), size.0, size.1)
}

// ── Collider ──────────────────────────────────────────────────────────────────

#[test]
fn collider_uses_collide_rect_not_sprite() {
    let cfg = GameConfig::default();
    let state = make_state(&cfg);
    // Touches the sprite's top edge area but not the lowered hit box
    let corner = Rect::new(state.player.rect.x, state.player.rect.y, 4.0, 4.0);
    assert!(corner.intersects(&state.player.rect));
    assert!(!state.player.collides_with(&corner));
}

// ── Player bullets vs enemies ─────────────────────────────────────────────────

#[test]
fn bullet_destroys_visible_enemy() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let enemy = enemy_at(&cfg, (900.0, 300.0));
    let (target_x, target_y) = enemy.collide_rect.center();
    state.player_bullets.push(bullet_on(&cfg, &enemy.collide_rect));
    state.enemies.push(enemy);

    let hit = resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(hit, PlayerHit::Unharmed);
    assert!(!state.enemies[0].alive);
    assert!(!state.player_bullets[0].alive);
    assert!((20..=50).contains(&state.stats.score));
    assert_eq!(state.explosions.len(), 1);
    assert_eq!(state.explosions[0].rect.w, cfg.explosion_base_side * cfg.plane_explosion_scale);
    // Centred on the hit box, not the sprite
    let (blast_x, blast_y) = state.explosions[0].rect.center();
    assert_relative_eq!(blast_x, target_x, epsilon = 1e-3);
    assert_relative_eq!(blast_y, target_y, epsilon = 1e-3);
    assert!(state.events.contains(&FrameEvent::Explosion));
}

#[test]
fn immortal_enemy_survives_but_eats_the_bullet() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut enemy = enemy_at(&cfg, (900.0, 300.0));
    enemy.is_immortal = true;
    state.player_bullets.push(bullet_on(&cfg, &enemy.collide_rect));
    state.enemies.push(enemy);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(state.enemies[0].alive);
    assert!(!state.player_bullets[0].alive);
    assert_eq!(state.stats.score, 0);
    assert!(state.explosions.is_empty());
}

#[test]
fn one_bullet_kills_one_enemy() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let a = enemy_at(&cfg, (900.0, 300.0));
    let b = enemy_at(&cfg, (900.0, 300.0));
    state.player_bullets.push(bullet_on(&cfg, &a.collide_rect));
    state.enemies.push(a);
    state.enemies.push(b);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(state.enemies.iter().filter(|e| !e.alive).count(), 1);
}

#[test]
fn second_bullet_skips_enemy_already_hit() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let enemy = enemy_at(&cfg, (900.0, 300.0));
    state.player_bullets.push(bullet_on(&cfg, &enemy.collide_rect));
    state.player_bullets.push(bullet_on(&cfg, &enemy.collide_rect));
    state.enemies.push(enemy);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(!state.enemies[0].alive);
    assert!(!state.player_bullets[0].alive);
    assert!(state.player_bullets[1].alive);
    assert_eq!(state.explosions.len(), 1);
}

// ── Torpedoes ─────────────────────────────────────────────────────────────────

#[test]
fn ready_torpedo_blasts_everything_in_its_square() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut torpedo = new_torpedo((1200.0, 300.0), &cfg, &mut seeded_rng());
    torpedo.target_center_x = torpedo.rect.center_x();
    let center = torpedo.rect.center();
    state.torpedoes.push(torpedo);
    state.enemies.push(enemy_at(&cfg, (center.0 + 150.0, center.1 - 100.0)));
    state.enemies.push(enemy_at(&cfg, (center.0 - 150.0, center.1 + 100.0)));
    state.enemies.push(enemy_at(&cfg, (center.0, center.1 + 350.0)));

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(!state.torpedoes[0].alive);
    assert!(!state.enemies[0].alive);
    assert!(!state.enemies[1].alive);
    assert!(state.enemies[2].alive);
    // One blast plus one explosion per downed plane
    assert_eq!(state.explosions.len(), 3);
    assert!(state.explosions.iter().any(|e| e.rect.w == cfg.torpedo_blast_side));
    assert!((40..=100).contains(&state.stats.score));
}

#[test]
fn torpedo_short_of_its_target_does_nothing() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut torpedo = new_torpedo((800.0, 300.0), &cfg, &mut seeded_rng());
    torpedo.target_center_x = 1200.0;
    let center = torpedo.rect.center();
    state.torpedoes.push(torpedo);
    state.enemies.push(enemy_at(&cfg, (center.0 + 150.0, center.1)));

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(state.torpedoes[0].alive);
    assert!(state.enemies[0].alive);
    assert!(state.explosions.is_empty());
}

#[test]
fn torpedo_blast_spares_immortal_enemies() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut torpedo = new_torpedo((1200.0, 300.0), &cfg, &mut seeded_rng());
    torpedo.target_center_x = torpedo.rect.center_x();
    let center = torpedo.rect.center();
    state.torpedoes.push(torpedo);
    let mut enemy = enemy_at(&cfg, (center.0 + 100.0, center.1));
    enemy.is_immortal = true;
    state.enemies.push(enemy);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(!state.torpedoes[0].alive);
    assert!(state.enemies[0].alive);
}

// ── Hostiles vs player ────────────────────────────────────────────────────────

#[test]
fn extra_life_absorbs_a_hit() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let bullet = enemy_bullet_on_player(&state, &cfg);
    state.enemy_bullets.push(bullet);

    let hit = resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(hit, PlayerHit::Shielded);
    assert!(!state.stats.extra_life);
    assert_eq!(state.player.immortal_timer, cfg.player_immortal_after_hit);
    assert!(!state.player.wrecked);
    assert!(!state.enemy_bullets[0].alive);
    assert!(state.game_over_countdown.is_none());
    assert!(state.events.contains(&FrameEvent::ExtraLifeLost));
    let boom = &state.explosions[0];
    assert_eq!(boom.rect.w, cfg.explosion_base_side * cfg.player_explosion_scale);
}

#[test]
fn last_hit_arms_game_over() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    state.stats.extra_life = false;
    let bullet = enemy_bullet_on_player(&state, &cfg);
    state.enemy_bullets.push(bullet);

    let hit = resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(hit, PlayerHit::Downed);
    assert!(state.player.wrecked);
    assert_eq!(state.game_over_countdown, Some(cfg.game_over_delay));

    assert_eq!(state.explosions.len(), 1);
    let (blast_x, blast_y) = state.explosions[0].rect.center();
    let (plane_x, plane_y) = state.player.rect.center();
    assert_relative_eq!(blast_x, plane_x, epsilon = 1e-3);
    assert_relative_eq!(blast_y, plane_y, epsilon = 1e-3);
}

#[test]
fn enemy_plane_ramming_counts_as_a_hit() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let enemy = enemy_at(&cfg, state.player.rect.center());
    state.enemies.push(enemy);

    let hit = resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(hit, PlayerHit::Shielded);
    assert!(state.enemies[0].alive);
}

#[test]
fn invulnerable_player_is_untouched() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    state.player.immortal_timer = 10;
    let bullet = enemy_bullet_on_player(&state, &cfg);
    state.enemy_bullets.push(bullet);

    let hit = resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(hit, PlayerHit::Unharmed);
    assert!(state.stats.extra_life);
    assert!(state.enemy_bullets[0].alive);
    assert!(state.explosions.is_empty());
}

#[test]
fn can_be_hit_requires_no_timer_no_wreck_no_countdown() {
    let cfg = GameConfig::default();
    let mut player = new_player(&cfg, &mut seeded_rng());
    assert!(can_be_hit(&player, None));
    assert!(!can_be_hit(&player, Some(3)));
    player.immortal_timer = 1;
    assert!(!can_be_hit(&player, None));
    player.immortal_timer = 0;
    player.wrecked = true;
    assert!(!can_be_hit(&player, None));
}

// ── Pickups ───────────────────────────────────────────────────────────────────

fn coin_on_player(state: &GameState, cfg: &GameConfig, kind: CoinKind) -> Coin {
    let rect = pickup_rect_on_player(state, cfg.coin_size);
    Coin {
        kind,
        value: cfg.coin_values[kind.index()],
        rect,
        collide_rect: coin_collide_rect(&rect, cfg),
        phase: 0.0,
        alive: true,
    }
}

fn heart_on_player(state: &GameState, cfg: &GameConfig) -> FlyingHeart {
    let rect = pickup_rect_on_player(state, cfg.heart_size);
    FlyingHeart {
        rect,
        collide_rect: rect,
        step: 0,
        start_center_y: rect.center_y(),
        delta_y: 40.0,
        speed_y: 1.0,
        alive: true,
    }
}

#[test]
fn coin_pickup_credits_value_and_sparkles() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let coin = coin_on_player(&state, &cfg, CoinKind::Silver);
    state.coins.push(coin);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(!state.coins[0].alive);
    assert_eq!(state.stats.coins, 3);
    assert_eq!(state.particles.len(), 1);
    assert_eq!(state.events, vec![FrameEvent::Pickup]);
}

#[test]
fn coin_balance_is_capped() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    state.stats.coins = 9998;
    let coin = coin_on_player(&state, &cfg, CoinKind::Gold);
    state.coins.push(coin);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(state.stats.coins, 9999);
}

#[test]
fn pickups_ignore_invulnerability() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    state.player.immortal_timer = 50;
    let coin = coin_on_player(&state, &cfg, CoinKind::Bronze);
    state.coins.push(coin);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert_eq!(state.stats.coins, 1);
}

#[test]
fn star_adds_its_value_to_score() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut star = new_star(&cfg, &mut seeded_rng());
    star.rect = pickup_rect_on_player(&state, cfg.score_star_size);
    star.collide_rect = star.rect;
    let value = star.value;
    state.stars.push(star);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(!state.stars[0].alive);
    assert_eq!(state.stats.score, value);
}

#[test]
fn heart_only_restores_a_missing_extra_life() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let heart = heart_on_player(&state, &cfg);
    state.hearts.push(heart);

    resolve(&mut state, &cfg, &mut seeded_rng());
    assert!(state.hearts[0].alive);
    assert!(state.particles.is_empty());

    state.stats.extra_life = false;
    resolve(&mut state, &cfg, &mut seeded_rng());
    assert!(!state.hearts[0].alive);
    assert!(state.stats.extra_life);
}

#[test]
fn wrecked_player_collects_nothing() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    state.player.wrecked = true;
    let coin = coin_on_player(&state, &cfg, CoinKind::Gold);
    state.coins.push(coin);

    resolve(&mut state, &cfg, &mut seeded_rng());

    assert!(state.coins[0].alive);
    assert_eq!(state.stats.coins, 0);
}
