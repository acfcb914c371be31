//! Application state and key dispatch.
//!
//! [`App`] owns the game aggregate plus presentation-only state (theme,
//! board cursor, name-field focus) and translates raw key events into core
//! actions. Everything that can change the game goes through
//! [`GameState::apply`], so the gate decides; rejected keys simply do
//! nothing, the same way disabled controls behave.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use tictactoe_core::{Action, Cell, GameState, Mark, NameEdit};
use tracing::{debug, instrument};

use crate::input;
use crate::theme::Theme;

/// Whether the event loop should keep running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// Exit the application cleanly.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    state: GameState,
    theme: Theme,
    cursor: Cell,
    focus: Mark,
}

impl App {
    /// Creates a fresh application with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            state: GameState::new(),
            theme,
            cursor: Cell::Center,
            focus: Mark::X,
        }
    }

    /// Handles a key event and returns whether to keep running.
    ///
    /// Before the game starts, printable keys feed the focused name field;
    /// afterwards they drive the board. Ctrl-combinations work in both
    /// phases so restart and the theme toggle stay reachable while typing.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Signal {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_ctrl_key(key.code);
        }

        if self.state.started() {
            self.handle_game_key(key.code)
        } else {
            self.handle_entry_key(key.code)
        }
    }

    fn handle_ctrl_key(&mut self, code: KeyCode) -> Signal {
        match code {
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.toggle_theme();
                Signal::Continue
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.state.apply(Action::Restart);
                Signal::Continue
            }
            KeyCode::Char('c') | KeyCode::Char('C') => Signal::Quit,
            _ => Signal::Continue,
        }
    }

    /// Keys during name entry (game not started).
    fn handle_entry_key(&mut self, code: KeyCode) -> Signal {
        match code {
            KeyCode::Char(c) => {
                self.state.apply(Action::EditName(self.focus, NameEdit::Push(c)));
            }
            KeyCode::Backspace => {
                self.state
                    .apply(Action::EditName(self.focus, NameEdit::Backspace));
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = self.focus.opponent();
            }
            KeyCode::Enter => {
                self.state.apply(Action::Start);
                if self.state.started() {
                    debug!("game started from name entry");
                    self.cursor = Cell::Center;
                }
            }
            KeyCode::Esc => return Signal::Quit,
            _ => {}
        }
        Signal::Continue
    }

    /// Keys while the game is running or resolved.
    fn handle_game_key(&mut self, code: KeyCode) -> Signal {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.state.apply(Action::PlaceMark(self.cursor));
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Cells are labeled 1-9 on screen, board indices are 0-8.
                if let Some(cell) = Cell::from_index(c as usize - '1' as usize) {
                    self.state.apply(Action::PlaceMark(cell));
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.state.apply(Action::Restart);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Signal::Quit,
            _ => {}
        }
        Signal::Continue
    }

    /// Toggles the color theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.label(), "theme toggled");
    }
}
