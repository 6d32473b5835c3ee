//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game.  No game logic is performed; this module only translates the
//! pixel-space sprites from `fly_rush::view` into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use fly_rush::config::GameConfig;
use fly_rush::entities::{BulletOwner, CoinKind, GameState, PlaneType, Skin};
use fly_rush::flow::{GameFlow, Screen};
use fly_rush::view::{hud, sprites, Sprite, SpriteKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BACKGROUND: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_COINS: Color = Color::DarkYellow;
const C_HUD_LIFE: Color = Color::Red;
const C_HUD_TORPEDO: Color = Color::Cyan;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_STAR: Color = Color::Yellow;
const C_HEART: Color = Color::Magenta;
const C_TORPEDO: Color = Color::White;
const C_EXPLOSION: Color = Color::DarkYellow;
const C_PARTICLE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_BUTTON: Color = Color::White;
const C_BUTTON_ACTIVE: Color = Color::Yellow;

/// Terminal cells available to the renderer.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    fn play_cols(&self) -> f32 {
        self.width.saturating_sub(2).max(1) as f32
    }

    fn play_rows(&self) -> f32 {
        self.height.saturating_sub(4).max(1) as f32
    }

    /// Map a playfield pixel to a terminal cell inside the border.
    fn cell(&self, cfg: &GameConfig, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= cfg.screen_w || y >= cfg.screen_h {
            return None;
        }
        let col = 1 + (x / cfg.screen_w * self.play_cols()) as u16;
        let row = 2 + (y / cfg.screen_h * self.play_rows()) as u16;
        Some((col, row))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: the session (if any) under the current menu.
pub fn render<W: Write>(
    out: &mut W,
    flow: &GameFlow,
    session: Option<&GameState>,
    cfg: &GameConfig,
    record: u32,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    if let Some(state) = session {
        draw_background(out, state, cfg, view)?;
        for sprite in sprites(state) {
            draw_sprite(out, &sprite, cfg, view)?;
        }
        draw_hud(out, state, cfg, view)?;
    }
    draw_menu(out, flow, session, record, view)?;
    draw_controls_hint(out, flow.screen(), view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

/// A sparse dotted sky that scrolls with the background offset.
fn draw_background<W: Write>(
    out: &mut W,
    state: &GameState,
    cfg: &GameConfig,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BACKGROUND))?;
    let spacing = cfg.screen_w / 8.0;
    for band in 0..4 {
        let y = cfg.screen_h * (band as f32 * 2.0 + 1.0) / 8.0;
        for i in 0..9 {
            let x = (i as f32 * spacing + band as f32 * spacing / 2.0 - state.background_x)
                .rem_euclid(cfg.screen_w);
            if let Some((col, row)) = view.cell(cfg, x, y) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print("·"))?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    cfg: &GameConfig,
    view: Viewport,
) -> std::io::Result<()> {
    let hud = hud(state, cfg);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}  Best:{:>6}", hud.score, hud.record.max(hud.score))))?;

    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(C_HUD_COINS))?;
    out.queue(Print(format!("Coins:{:>4}", hud.coins)))?;

    let torpedo = match hud.reload_clock {
        Some(_) => format!("Torpedo {:>5.2}s", hud.torpedo_reload as f32 / cfg.fps as f32),
        None if hud.torpedo_affordable => "Torpedo READY".to_string(),
        None => format!("Torpedo ({} coins)", cfg.torpedo_price),
    };
    let life = if hud.extra_life { "♥ ♥" } else { "♥" };
    let right_str = format!("{torpedo}  {life}");
    let rx = view.width.saturating_sub(right_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TORPEDO))?;
    out.queue(Print(&torpedo))?;
    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(C_HUD_LIFE))?;
    out.queue(Print(life))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn skin_color(skin: Skin) -> Color {
    match skin {
        Skin::Red => Color::Red,
        Skin::Blue => Color::Blue,
        Skin::Green => Color::Green,
        Skin::Yellow => Color::Yellow,
    }
}

fn glyph(sprite: &Sprite) -> (&'static str, Color) {
    match sprite.kind {
        // Invulnerability flicker shows as a dimmed plane
        SpriteKind::Player(_) if sprite.image == 1 => ("═►", Color::DarkGrey),
        SpriteKind::Player(skin) => ("═►", skin_color(skin)),
        SpriteKind::Enemy(PlaneType::Light, skin) => ("◄─", skin_color(skin)),
        SpriteKind::Enemy(PlaneType::Heavy, skin) => ("◄═╡", skin_color(skin)),
        SpriteKind::Bullet(BulletOwner::Player) => ("-", C_BULLET_PLAYER),
        SpriteKind::Bullet(BulletOwner::Enemy) => ("~", C_BULLET_ENEMY),
        SpriteKind::Coin(kind) => {
            let color = match kind {
                CoinKind::Bronze => Color::DarkYellow,
                CoinKind::Silver => Color::Grey,
                CoinKind::Gold => Color::Yellow,
            };
            // The spin reads as a coin seen edge-on every few frames
            if (5..=9).contains(&sprite.image) {
                ("|", color)
            } else {
                ("o", color)
            }
        }
        SpriteKind::ScoreStar(angle) => {
            if (angle as u32 / 45) % 2 == 0 {
                ("✦", C_STAR)
            } else {
                ("✧", C_STAR)
            }
        }
        SpriteKind::FlyingHeart => ("♥", C_HEART),
        SpriteKind::Torpedo => ("=>", C_TORPEDO),
        SpriteKind::Explosion => {
            const FRAMES: [&str; 9] = ["·", "*", "✶", "✷", "✸", "✹", "✺", "*", "·"];
            (FRAMES[(sprite.image as usize).min(FRAMES.len() - 1)], C_EXPLOSION)
        }
        SpriteKind::Particle => (".", C_PARTICLE),
    }
}

fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    cfg: &GameConfig,
    view: Viewport,
) -> std::io::Result<()> {
    let (x, y) = sprite.rect.center();
    let Some((col, row)) = view.cell(cfg, x, y) else {
        return Ok(());
    };
    let (text, color) = glyph(sprite);
    let max_col = view.width.saturating_sub(1 + text.chars().count() as u16);
    out.queue(cursor::MoveTo(col.min(max_col).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Menus ─────────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(
    out: &mut W,
    flow: &GameFlow,
    session: Option<&GameState>,
    record: u32,
    view: Viewport,
) -> std::io::Result<()> {
    let Some(menu) = flow.active_menu() else {
        return Ok(());
    };
    let (title, color) = match flow.screen() {
        Screen::Menu => ("★  FLY  RUSH  ★", Color::Cyan),
        Screen::Pause => ("PAUSE", Color::White),
        Screen::GameOver => ("GAME  OVER", Color::Red),
        Screen::Gameplay => return Ok(()),
    };

    let mut lines: Vec<(String, Color)> = vec![(title.to_string(), color), (String::new(), color)];
    if flow.screen() == Screen::GameOver {
        if let Some(state) = session {
            lines.push((format!("Final Score: {:>6}", state.stats.score), Color::Yellow));
        }
    }
    if record > 0 {
        lines.push((format!("Best Score:  {:>6}", record), Color::DarkGrey));
    }
    lines.push((String::new(), color));
    for (i, button) in menu.buttons.iter().enumerate() {
        if i == menu.active {
            lines.push((format!("> {} <", button.label()), C_BUTTON_ACTIVE));
        } else {
            lines.push((format!("  {}  ", button.label()), C_BUTTON));
        }
    }

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen, view: Viewport) -> std::io::Result<()> {
    let hint = match screen {
        Screen::Gameplay => "W A S D : Move   SPACE : Shoot   E : Torpedo   ESC : Pause",
        _ => "W / S : Select   SPACE / ENTER : Confirm   Q : Quit",
    };
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}
