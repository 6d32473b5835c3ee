//! Read-only snapshot of a session for the renderer and the speakers.
//!
//! The simulation never draws or plays anything itself; front-ends ask for
//! `(kind, rect, image)` sprite tuples in back-to-front order, the HUD
//! values, and the sound cue for each `FrameEvent`.

use crate::config::GameConfig;
use crate::entities::{BulletOwner, CoinKind, FrameEvent, GameState, PlaneType, Skin};
use crate::geometry::Rect;
use crate::movers::{heart_image, torpedo_image};

/// Images in the torpedo reload clock.
pub const RELOAD_CLOCK_IMAGES: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpriteKind {
    Player(Skin),
    Enemy(PlaneType, Skin),
    Bullet(BulletOwner),
    Coin(CoinKind),
    /// Rotation in degrees.
    ScoreStar(f32),
    FlyingHeart,
    Torpedo,
    Explosion,
    Particle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    /// Index into the kind's image sequence.
    pub image: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    pub coins: u32,
    pub extra_life: bool,
    pub record: u32,
    /// Frames until the torpedo can be fired again (0 = ready).
    pub torpedo_reload: u32,
    /// Image of the reload clock, `None` while the torpedo is ready.
    pub reload_clock: Option<u32>,
    pub torpedo_affordable: bool,
}

/// The player blinks between its normal (0) and see-through (1) image every
/// ten frames of invulnerability, ending on the normal one.
pub fn player_image(immortal_timer: u32) -> u32 {
    if immortal_timer > 1 && (immortal_timer / 10) % 2 == 0 {
        1
    } else {
        0
    }
}

pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut out = Vec::new();

    for b in state.player_bullets.iter().chain(&state.enemy_bullets) {
        out.push(Sprite { kind: SpriteKind::Bullet(b.owner), rect: b.rect, image: 0 });
    }
    for c in &state.coins {
        out.push(Sprite { kind: SpriteKind::Coin(c.kind), rect: c.rect, image: c.phase as u32 });
    }
    for s in &state.stars {
        out.push(Sprite { kind: SpriteKind::ScoreStar(s.angle), rect: s.rect, image: 0 });
    }
    for h in &state.hearts {
        out.push(Sprite { kind: SpriteKind::FlyingHeart, rect: h.rect, image: heart_image(h) });
    }
    for t in &state.torpedoes {
        out.push(Sprite { kind: SpriteKind::Torpedo, rect: t.rect, image: torpedo_image(t) });
    }
    if !state.player.wrecked {
        out.push(Sprite {
            kind: SpriteKind::Player(state.player.skin),
            rect: state.player.rect,
            image: player_image(state.player.immortal_timer),
        });
    }
    for e in &state.enemies {
        out.push(Sprite { kind: SpriteKind::Enemy(e.plane_type, e.skin), rect: e.rect, image: 0 });
    }
    for e in &state.explosions {
        out.push(Sprite { kind: SpriteKind::Explosion, rect: e.rect, image: e.image });
    }
    for p in &state.particles {
        out.push(Sprite { kind: SpriteKind::Particle, rect: p.rect, image: p.image });
    }
    out
}

pub fn hud(state: &GameState, cfg: &GameConfig) -> Hud {
    let reload_clock = if state.torpedo_reload == 0 || cfg.torpedo_reload == 0 {
        None
    } else {
        let elapsed = cfg.torpedo_reload.saturating_sub(state.torpedo_reload) as u64;
        let step = elapsed * RELOAD_CLOCK_IMAGES as u64 / cfg.torpedo_reload as u64;
        Some((step as u32).min(RELOAD_CLOCK_IMAGES - 1))
    };
    Hud {
        score: state.stats.score,
        coins: state.stats.coins,
        extra_life: state.stats.extra_life,
        record: state.stats.record,
        torpedo_reload: state.torpedo_reload,
        reload_clock,
        torpedo_affordable: state.stats.coins >= cfg.torpedo_price,
    }
}

/// Sound cue name and volume for an event; `None` for silent events.
pub fn sound_for(event: &FrameEvent) -> Option<(&'static str, f32)> {
    match event {
        FrameEvent::Shot => Some(("shot", 0.4)),
        FrameEvent::Explosion => Some(("explosion", 0.7)),
        FrameEvent::TorpedoLaunch => Some(("torpedo", 0.8)),
        FrameEvent::Pickup => Some(("particle", 0.5)),
        FrameEvent::ExtraLifeLost => Some(("explosion", 1.0)),
        FrameEvent::GameOver => Some(("game_over", 1.0)),
        FrameEvent::NewRecord(_) => None,
    }
}
