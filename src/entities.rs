//! Game entity types: plain data, no logic.
//!
//! Every moving object keeps two rectangles: `rect` is what gets drawn and
//! `collide_rect` is what gets hit-tested.  The collision rectangle is always
//! re-derived from `rect` by the entity's update rule in `movers`.

use crate::geometry::Rect;

// ── Shared tags ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skin {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Red, Skin::Blue, Skin::Green, Skin::Yellow];
}

/// Enemy airframe.  The large one gets a taller collision box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneType {
    Light,
    Heavy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinKind {
    Bronze,
    Silver,
    Gold,
}

impl CoinKind {
    pub const ALL: [CoinKind; 3] = [CoinKind::Bronze, CoinKind::Silver, CoinKind::Gold];

    pub fn index(self) -> usize {
        match self {
            CoinKind::Bronze => 0,
            CoinKind::Silver => 1,
            CoinKind::Gold => 2,
        }
    }
}

// ── Planes ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct PlayerPlane {
    pub rect: Rect,
    pub collide_rect: Rect,
    pub skin: Skin,
    /// Frames until the next bullet may be fired.
    pub reload: u32,
    /// Frames of invulnerability left; 0 means the player can be hit.
    pub immortal_timer: u32,
    /// Set once the last life is gone: hidden, frozen, never hit-tested.
    pub wrecked: bool,
}

#[derive(Clone, Debug)]
pub struct EnemyPlane {
    pub plane_type: PlaneType,
    pub skin: Skin,
    pub rect: Rect,
    pub collide_rect: Rect,
    /// Approach phase ends once `rect.right()` drops below this.
    pub right_target_x: f32,
    pub start_top: f32,
    pub delta_y: f32,
    /// Signed vertical step of the oscillation phase.
    pub speed_y: f32,
    pub reload: u32,
    /// True until the plane's centre has entered the screen.
    pub is_immortal: bool,
    pub alive: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub rect: Rect,
    pub collide_rect: Rect,
    pub owner: BulletOwner,
    /// Signed horizontal velocity: positive for the player, negative for enemies.
    pub speed: f32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct Torpedo {
    pub rect: Rect,
    pub collide_rect: Rect,
    /// Detonates once `rect.center_x()` reaches this line.
    pub target_center_x: f32,
    pub start_center_y: f32,
    pub speed_y: f32,
    pub step: u32,
    pub alive: bool,
}

// ── Pickups ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Coin {
    pub kind: CoinKind,
    pub value: u32,
    pub rect: Rect,
    pub collide_rect: Rect,
    /// Animation phase in `[0, 15)`; also decides whether the coin rises or falls.
    pub phase: f32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct ScoreStar {
    pub value: u32,
    /// Unrotated image size; `rect` is its rotated bounding box.
    pub size: (f32, f32),
    pub rect: Rect,
    pub collide_rect: Rect,
    pub angle: f32,
    /// Signed degrees per frame, fixed at spawn.
    pub angle_speed: f32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct FlyingHeart {
    pub rect: Rect,
    pub collide_rect: Rect,
    pub step: u32,
    pub start_center_y: f32,
    pub delta_y: f32,
    pub speed_y: f32,
    pub alive: bool,
}

// ── Visual-only ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Explosion {
    pub rect: Rect,
    pub step: u32,
    pub image: u32,
    pub alive: bool,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub rect: Rect,
    pub step: u32,
    pub image: u32,
    pub alive: bool,
}

// ── Session bookkeeping ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStats {
    pub score: u32,
    pub coins: u32,
    pub extra_life: bool,
    /// Best score known to this session (loaded at start, raised at game over).
    pub record: u32,
}

/// One frame-counted spawn countdown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimer {
    pub remaining: u32,
    pub period: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimers {
    pub enemy: SpawnTimer,
    pub coin: SpawnTimer,
    pub star: SpawnTimer,
    pub heart: SpawnTimer,
    pub score_tick: SpawnTimer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// Fire-and-forget notifications produced during one tick (sounds, record).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameEvent {
    Shot,
    Explosion,
    TorpedoLaunch,
    Pickup,
    ExtraLifeLost,
    GameOver,
    NewRecord(u32),
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Keys currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Everything the simulation needs from the keyboard for one frame: the
/// held state plus edge-triggered presses seen since the previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub torpedo: bool,
    pub pause: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire gameplay session.  Cloneable so the pure update functions in
/// `compute` can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: PlayerPlane,
    pub stats: PlayerStats,
    pub enemies: Vec<EnemyPlane>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
    pub coins: Vec<Coin>,
    pub stars: Vec<ScoreStar>,
    pub hearts: Vec<FlyingHeart>,
    pub torpedoes: Vec<Torpedo>,
    pub explosions: Vec<Explosion>,
    pub particles: Vec<Particle>,
    pub timers: SpawnTimers,
    /// Frames until the torpedo may be fired again.
    pub torpedo_reload: u32,
    /// Armed when the last life is lost; the session ends when it runs out.
    pub game_over_countdown: Option<u32>,
    /// Horizontal scroll offset of the background, in `[0, screen_w)`.
    pub background_x: f32,
    pub status: GameStatus,
    pub frame: u64,
    /// Events produced by the most recent tick.
    pub events: Vec<FrameEvent>,
}
