use fly_rush::compute::init_state;
use fly_rush::config::GameConfig;
use fly_rush::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn tag_enums_compare() {
    assert_eq!(PlaneType::Light, PlaneType::Light);
    assert_ne!(PlaneType::Light, PlaneType::Heavy);
    assert_ne!(BulletOwner::Player, BulletOwner::Enemy);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(FrameEvent::NewRecord(5), FrameEvent::NewRecord(5));
    assert_ne!(FrameEvent::NewRecord(5), FrameEvent::NewRecord(6));
}

#[test]
fn coin_kind_index_matches_all_order() {
    for (i, kind) in CoinKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn skins_are_distinct() {
    for (i, a) in Skin::ALL.iter().enumerate() {
        for b in &Skin::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn default_input_is_idle() {
    let input = FrameInput::default();
    assert_eq!(input.held, HeldKeys::default());
    assert!(!input.torpedo);
    assert!(!input.pause);
}

#[test]
fn game_state_clone_is_independent() {
    let cfg = GameConfig::default();
    let original = init_state(&cfg, 0, &mut StdRng::seed_from_u64(42));
    let mut cloned = original.clone();

    cloned.stats.score = 999;
    cloned.player.rect.x = 0.0;
    cloned.events.push(FrameEvent::Shot);

    assert_eq!(original.stats.score, 0);
    assert_eq!(original.player.rect.x, 152.0);
    assert!(original.events.is_empty());
}
