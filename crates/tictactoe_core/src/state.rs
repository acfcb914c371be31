//! The game-state aggregate and its action handlers.
//!
//! Every user action runs through [`GameState::apply`]: a command/handler
//! pattern where each action has exactly one transition function. Actions
//! the gate rejects are silent no-ops - the state does not change and no
//! error is raised, matching disabled controls at the interface layer.

use crate::cell::Cell;
use crate::gate;
use crate::names::{NameDraft, Roster};
use crate::rules::{Win, detect_win};
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing (or not yet started).
    InProgress,
    /// Game ended with a completed line.
    Won(Win),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// True once the game has ended in a win or draw.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the win record, if the game was won.
    pub fn win(&self) -> Option<&Win> {
        match self {
            Outcome::Won(win) => Some(win),
            _ => None,
        }
    }
}

/// An edit to one of the pending name fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameEdit {
    /// Append a character.
    Push(char),
    /// Remove the last character.
    Backspace,
}

/// A user action fed into the state machine.
///
/// Actions are first-class domain events: the front end translates raw
/// input into these and never mutates state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at a cell.
    PlaceMark(Cell),
    /// Edit the pending name field for a mark.
    EditName(Mark, NameEdit),
    /// Confirm both names and start the game.
    Start,
    /// Reset everything to initial values.
    Restart,
}

/// Complete session state for one game of tic-tac-toe.
///
/// A single aggregate owns the board, whose turn it is, the pending and
/// confirmed names, and the outcome. It is created once per session and
/// reset in place by [`GameState::restart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
    draft: NameDraft,
    roster: Option<Roster>,
    outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, no names, not
    /// started.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            draft: NameDraft::new(),
            roster: None,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the pending name fields.
    pub fn draft(&self) -> &NameDraft {
        &self.draft
    }

    /// Returns the confirmed names, if the game has started.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// True once both names are confirmed.
    pub fn started(&self) -> bool {
        self.roster.is_some()
    }

    /// Applies a user action, silently ignoring any the gate rejects.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::PlaceMark(cell) => self.place_mark(cell),
            Action::EditName(mark, edit) => self.edit_name(mark, edit),
            Action::Start => self.start(),
            Action::Restart => self.restart(),
        }
    }

    /// Places the current mark at `cell`.
    ///
    /// Ignored unless the game has started, the outcome is unresolved, and
    /// the cell is empty. A game-ending move leaves `turn` unchanged;
    /// otherwise the turn flips.
    pub fn place_mark(&mut self, cell: Cell) {
        if !gate::accepts_mark(self, cell) {
            debug!(cell = %cell, "mark rejected by gate");
            return;
        }

        self.board.set(cell, Square::Taken(self.turn));

        if let Some(win) = detect_win(&self.board) {
            debug!(mark = %win.mark, "game won");
            self.outcome = Outcome::Won(win);
        } else if self.board.is_full() {
            debug!("board full, game drawn");
            self.outcome = Outcome::Draw;
        } else {
            self.turn = self.turn.opponent();
        }
    }

    /// Edits the pending name field for `mark`.
    ///
    /// Ignored once the game has started - the fields lock.
    pub fn edit_name(&mut self, mark: Mark, edit: NameEdit) {
        if !gate::accepts_name_edit(self) {
            debug!(%mark, "name edit rejected: fields are locked");
            return;
        }
        match edit {
            NameEdit::Push(c) => self.draft.push(mark, c),
            NameEdit::Backspace => self.draft.backspace(mark),
        }
    }

    /// Confirms both pending names and starts the game.
    ///
    /// Ignored unless both fields are non-empty after trimming. The names
    /// are trimmed as they are confirmed.
    pub fn start(&mut self) {
        if !gate::accepts_start(self) {
            debug!("start rejected: names not ready");
            return;
        }
        self.roster = self.draft.confirm();
        debug!("game started");
    }

    /// Resets to the initial state. Always accepted.
    pub fn restart(&mut self) {
        debug!("restarting");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
