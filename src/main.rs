mod display;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use fly_rush::compute::{init_state, reset, resume, tick};
use fly_rush::config::GameConfig;
use fly_rush::entities::{FrameInput, GameState, GameStatus, HeldKeys};
use fly_rush::flow::{FlowCommand, GameFlow, MenuKey, Screen};
use fly_rush::save::SaveStore;
use fly_rush::view::sound_for;

use display::Viewport;

const CONFIG_FILE: &str = "fly_rush.toml";
const LOG_FILE: &str = "fly_rush.log";

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn held_keys(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> HeldKeys {
    use KeyCode::Char;
    HeldKeys {
        up: is_held(key_frame, &[KeyCode::Up, Char('w'), Char('W')], frame),
        down: is_held(key_frame, &[KeyCode::Down, Char('s'), Char('S')], frame),
        left: is_held(key_frame, &[KeyCode::Left, Char('a'), Char('A')], frame),
        right: is_held(key_frame, &[KeyCode::Right, Char('d'), Char('D')], frame),
        fire: is_held(key_frame, &[Char(' ')], frame),
    }
}

fn menu_key(code: KeyCode) -> Option<MenuKey> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuKey::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuKey::Confirm),
        _ => None,
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log lines go to a file next to the saved record; the terminal belongs to
/// the game.  `RUST_LOG` overrides the default `info` level.
fn init_logging(store: &SaveStore) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    let opened = fs::create_dir_all(store.dir()).and_then(|_| File::create(store.dir().join(LOG_FILE)));
    match opened {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything the game loop owns between frames.
struct App {
    cfg: GameConfig,
    store: SaveStore,
    flow: GameFlow,
    session: Option<GameState>,
    record: u32,
    rng: ThreadRng,
}

impl App {
    fn new(cfg: GameConfig, store: SaveStore) -> Self {
        let record = store.load_record();
        log::info!("loaded record {record}");
        App {
            cfg,
            store,
            flow: GameFlow::new(),
            session: None,
            record,
            rng: thread_rng(),
        }
    }

    /// Persist the session's score if it beat the stored record.
    fn bank_record(&mut self) {
        let Some(state) = &self.session else {
            return;
        };
        let score = state.stats.score;
        match self.store.save_record_if_beaten(score, self.record) {
            Ok(true) => self.record = score,
            Ok(false) => {}
            Err(err) => log::warn!("could not save record {score}: {err}"),
        }
    }

    /// Carry out a flow command; returns `true` when the program should exit.
    fn apply(&mut self, command: FlowCommand) -> bool {
        match command {
            FlowCommand::Nothing => {}
            FlowCommand::Highlight => log::debug!("sound: change"),
            FlowCommand::StartSession => {
                log::debug!("sound: click");
                self.session = Some(init_state(&self.cfg, self.record, &mut self.rng));
            }
            FlowCommand::ResumeSession => {
                log::debug!("sound: click");
                self.session = self.session.as_ref().map(resume);
            }
            FlowCommand::RetrySession => {
                log::debug!("sound: click");
                self.bank_record();
                let record = self.record;
                self.session = match self.session.take() {
                    Some(state) => {
                        let mut next = reset(&state, &self.cfg, &mut self.rng);
                        next.stats.record = record;
                        Some(next)
                    }
                    None => Some(init_state(&self.cfg, record, &mut self.rng)),
                };
            }
            FlowCommand::DiscardSession => {
                log::debug!("sound: click");
                self.bank_record();
                self.session = None;
            }
            FlowCommand::Quit => return true,
        }
        false
    }

    fn step(&mut self, input: &FrameInput) {
        let Some(state) = &self.session else {
            return;
        };
        let next = tick(state, input, &self.cfg, &mut self.rng);
        for event in &next.events {
            if let Some((name, volume)) = sound_for(event) {
                log::debug!("sound: {name} ({volume:.1})");
            }
        }
        let status = next.status;
        self.session = Some(next);
        if status == GameStatus::GameOver {
            self.bank_record();
        }
        self.flow.observe(status);
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which keys are still "fresh"
/// (within `HOLD_WINDOW` frames) and hand all of them to the simulation at
/// once, so Space can be held together with any direction.
///
/// Menu screens react to individual presses only.
fn run<W: Write>(out: &mut W, app: &mut App, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / app.cfg.fps.max(1) as f64);

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut input = FrameInput::default();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => {
                            app.bank_record();
                            return Ok(());
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            app.bank_record();
                            return Ok(());
                        }
                        _ => {}
                    }
                    if app.flow.screen() == Screen::Gameplay {
                        match code {
                            KeyCode::Esc => input.pause = true,
                            KeyCode::Char('e') | KeyCode::Char('E') => input.torpedo = true,
                            _ => {}
                        }
                    } else if let Some(key) = menu_key(code) {
                        let command = app.flow.press(key);
                        if app.apply(command) {
                            app.bank_record();
                            return Ok(());
                        }
                        // Don't let the confirming key leak into the new session
                        key_frame.clear();
                    }
                }
                // Repeat: refresh timestamp so key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if app.flow.screen() == Screen::Gameplay {
            input.held = held_keys(&key_frame, frame);
            app.step(&input);
        }

        let (width, height) = terminal::size()?;
        display::render(
            out,
            &app.flow,
            app.session.as_ref(),
            &app.cfg,
            app.record,
            Viewport { width, height },
        )?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let store = SaveStore::default_location();
    init_logging(&store);
    let cfg = GameConfig::load_or_default(CONFIG_FILE);
    let mut app = App::new(cfg, store);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &mut app, &rx);
    if let Err(err) = &result {
        log::error!("game loop failed: {err}");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
