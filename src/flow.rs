//! Screen flow around the gameplay session: main menu, gameplay, pause and
//! game over.  Every non-gameplay screen is a two-button vertical menu.
//!
//! The controller only decides *what* should happen; the caller owns the
//! `GameState` and carries out the returned [`FlowCommand`].

use crate::entities::GameStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Gameplay,
    Pause,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Play,
    Quit,
    Resume,
    Home,
    Retry,
}

impl Button {
    pub fn label(self) -> &'static str {
        match self {
            Button::Play => "PLAY",
            Button::Quit => "QUIT",
            Button::Resume => "RESUME",
            Button::Home => "HOME",
            Button::Retry => "RETRY",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Confirm,
}

/// What the caller must do with the session after a menu key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowCommand {
    Nothing,
    /// A button moved; play the "change" cue.
    Highlight,
    StartSession,
    ResumeSession,
    RetrySession,
    /// Drop the session and go back to the main menu.
    DiscardSession,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonMenu {
    pub buttons: [Button; 2],
    pub active: usize,
}

impl ButtonMenu {
    pub fn new(buttons: [Button; 2]) -> Self {
        ButtonMenu { buttons, active: 0 }
    }

    pub fn active_button(&self) -> Button {
        self.buttons[self.active]
    }

    /// Returns whether the highlight moved.
    pub fn press(&mut self, key: MenuKey) -> bool {
        match key {
            MenuKey::Up if self.active > 0 => {
                self.active -= 1;
                true
            }
            MenuKey::Down if self.active + 1 < self.buttons.len() => {
                self.active += 1;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GameFlow {
    screen: Screen,
    main_menu: ButtonMenu,
    pause_menu: ButtonMenu,
    game_over_menu: ButtonMenu,
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl GameFlow {
    pub fn new() -> Self {
        GameFlow {
            screen: Screen::Menu,
            main_menu: ButtonMenu::new([Button::Play, Button::Quit]),
            pause_menu: ButtonMenu::new([Button::Resume, Button::Home]),
            game_over_menu: ButtonMenu::new([Button::Retry, Button::Home]),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The menu shown on the current screen, if any.
    pub fn active_menu(&self) -> Option<&ButtonMenu> {
        match self.screen {
            Screen::Menu => Some(&self.main_menu),
            Screen::Pause => Some(&self.pause_menu),
            Screen::GameOver => Some(&self.game_over_menu),
            Screen::Gameplay => None,
        }
    }

    fn active_menu_mut(&mut self) -> Option<&mut ButtonMenu> {
        match self.screen {
            Screen::Menu => Some(&mut self.main_menu),
            Screen::Pause => Some(&mut self.pause_menu),
            Screen::GameOver => Some(&mut self.game_over_menu),
            Screen::Gameplay => None,
        }
    }

    fn switch_to(&mut self, screen: Screen) {
        if let Some(menu) = self.active_menu_mut() {
            menu.active = 0;
        }
        log::debug!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    /// Handle a key press on a menu screen.  Ignored during gameplay.
    pub fn press(&mut self, key: MenuKey) -> FlowCommand {
        let Some(menu) = self.active_menu_mut() else {
            return FlowCommand::Nothing;
        };
        if key != MenuKey::Confirm {
            return if menu.press(key) { FlowCommand::Highlight } else { FlowCommand::Nothing };
        }

        let (next, command) = match menu.active_button() {
            Button::Play => (Screen::Gameplay, FlowCommand::StartSession),
            Button::Resume => (Screen::Gameplay, FlowCommand::ResumeSession),
            Button::Retry => (Screen::Gameplay, FlowCommand::RetrySession),
            Button::Home => (Screen::Menu, FlowCommand::DiscardSession),
            Button::Quit => return FlowCommand::Quit,
        };
        self.switch_to(next);
        command
    }

    /// Follow the session's status after a gameplay tick.
    pub fn observe(&mut self, status: GameStatus) {
        if self.screen != Screen::Gameplay {
            return;
        }
        match status {
            GameStatus::Playing => {}
            GameStatus::Paused => self.switch_to(Screen::Pause),
            GameStatus::GameOver => self.switch_to(Screen::GameOver),
        }
    }
}
