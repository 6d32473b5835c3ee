use fly_rush::compute::init_state;
use fly_rush::config::{GameConfig, SpawnRule};
use fly_rush::entities::*;
use fly_rush::spawn::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn make_state(cfg: &GameConfig) -> GameState {
    init_state(cfg, 0, &mut seeded_rng())
}

// ── SpawnTimer ────────────────────────────────────────────────────────────────

#[test]
fn timer_fires_every_period_frames() {
    let mut t = SpawnTimer::new(5);
    let fired: Vec<u32> = (1..=20).filter(|_| t.advance()).collect();
    assert_eq!(fired, vec![5, 10, 15, 20]);
    assert_eq!(t.remaining, 5);
}

#[test]
fn zero_period_fires_every_frame() {
    let mut t = SpawnTimer::new(0);
    assert!((0..10).all(|_| t.advance()));
}

#[test]
fn timers_start_armed_from_config() {
    let cfg = GameConfig::default();
    let timers = SpawnTimers::from_config(&cfg);
    assert_eq!(timers.enemy.remaining, cfg.enemy_spawn.period);
    assert_eq!(timers.coin.remaining, cfg.coin_spawn.period);
    assert_eq!(timers.star.remaining, cfg.star_spawn.period);
    assert_eq!(timers.heart.remaining, cfg.heart_spawn.period);
    assert_eq!(timers.score_tick.remaining, cfg.score_tick_period);
}

#[test]
fn timers_report_their_own_opportunities() {
    let cfg = GameConfig::default();
    let mut timers = SpawnTimers::from_config(&cfg);
    for _ in 0..59 {
        assert_eq!(timers.advance(), SpawnOpportunities::default());
    }
    let due = timers.advance();
    assert!(due.enemy && due.score_tick);
    assert!(!due.coin && !due.star && !due.heart);
}

// ── Gate ──────────────────────────────────────────────────────────────────────

#[test]
fn gate_of_one_always_passes() {
    let mut rng = seeded_rng();
    let rule = SpawnRule { period: 10, gate: 1 };
    assert!((0..100).all(|_| passes_gate(&rule, &mut rng)));
}

#[test]
fn gate_of_zero_is_treated_as_always() {
    let mut rng = seeded_rng();
    let rule = SpawnRule { period: 10, gate: 0 };
    assert!((0..100).all(|_| passes_gate(&rule, &mut rng)));
}

#[test]
fn gate_of_two_passes_about_half_the_time() {
    let mut rng = seeded_rng();
    let rule = SpawnRule { period: 10, gate: 2 };
    let passed = (0..1000).filter(|_| passes_gate(&rule, &mut rng)).count();
    assert!(passed > 400 && passed < 600, "passed = {passed}");
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[test]
fn ungated_pickups_spawn_once_per_period() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut rng = seeded_rng();
    for _ in 0..1440 {
        run_scheduler(&mut state, &cfg, &mut rng);
    }
    assert_eq!(state.coins.len(), 1440 / 360);
    assert_eq!(state.stars.len(), 1440 / 360);
    assert_eq!(state.hearts.len(), 1440 / 480);
}

#[test]
fn enemies_never_exceed_cap() {
    let cfg = GameConfig {
        enemy_cap: 3,
        enemy_spawn: SpawnRule { period: 1, gate: 1 },
        ..GameConfig::default()
    };
    let mut state = make_state(&cfg);
    let mut rng = seeded_rng();
    for _ in 0..100 {
        run_scheduler(&mut state, &cfg, &mut rng);
        assert!(state.enemies.len() <= 3);
    }
    assert_eq!(state.enemies.len(), 3);
}

#[test]
fn gated_enemies_spawn_at_most_once_per_period() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut rng = seeded_rng();
    for _ in 0..600 {
        run_scheduler(&mut state, &cfg, &mut rng);
    }
    assert!(state.enemies.len() <= 600 / 60);
    assert!(!state.enemies.is_empty());
}

#[test]
fn score_ticks_with_bonus_in_range() {
    let cfg = GameConfig::default();
    let mut state = make_state(&cfg);
    let mut rng = seeded_rng();

    for _ in 0..59 {
        run_scheduler(&mut state, &cfg, &mut rng);
    }
    assert_eq!(state.stats.score, 0);

    run_scheduler(&mut state, &cfg, &mut rng);
    assert!((2..=5).contains(&state.stats.score));

    for _ in 0..540 {
        run_scheduler(&mut state, &cfg, &mut rng);
    }
    assert!((20..=50).contains(&state.stats.score));
}

#[test]
fn pending_game_over_spawns_nothing_but_timers_run() {
    let cfg = GameConfig {
        enemy_spawn: SpawnRule { period: 1, gate: 1 },
        ..GameConfig::default()
    };
    let mut state = make_state(&cfg);
    state.game_over_countdown = Some(40);
    state.timers.coin.remaining = 1;
    state.timers.score_tick.remaining = 1;
    let mut rng = seeded_rng();

    run_scheduler(&mut state, &cfg, &mut rng);

    assert!(state.enemies.is_empty());
    assert!(state.coins.is_empty());
    assert_eq!(state.stats.score, 0);
    assert_eq!(state.timers.coin.remaining, cfg.coin_spawn.period);
    assert_eq!(state.timers.score_tick.remaining, cfg.score_tick_period);
}
