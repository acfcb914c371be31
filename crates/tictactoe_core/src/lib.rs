//! Pure two-player tic-tac-toe game logic.
//!
//! This crate owns the complete game-state machine and nothing else: no
//! terminal types, no I/O. The front end feeds user actions into
//! [`GameState::apply`] and projects the result back out.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Mark`], [`Square`], [`Cell`]
//! - **Rules**: [`detect_win`] scans the eight fixed lines
//! - **Gate**: pure predicates deciding which actions are currently accepted
//! - **State**: [`GameState`] aggregate with one transition per action
//! - **Status**: [`status_line`] derives the display text on demand
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, Cell, GameState, Mark, NameEdit};
//!
//! let mut state = GameState::new();
//! for c in "Ann".chars() {
//!     state.apply(Action::EditName(Mark::X, NameEdit::Push(c)));
//! }
//! for c in "Bob".chars() {
//!     state.apply(Action::EditName(Mark::O, NameEdit::Push(c)));
//! }
//! state.apply(Action::Start);
//! state.apply(Action::PlaceMark(Cell::Center));
//! assert_eq!(state.turn(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cell;
mod gate;
mod names;
mod rules;
mod state;
mod status;
mod types;

// Crate-level exports - board and marks
pub use types::{Board, Mark, Square};

// Crate-level exports - positions
pub use cell::Cell;

// Crate-level exports - win detection
pub use rules::{LINES, Line, Win, detect_win};

// Crate-level exports - player names
pub use names::{NAME_MAX, NameDraft, Roster};

// Crate-level exports - state machine
pub use state::{Action, GameState, NameEdit, Outcome};

// Crate-level exports - input gating
pub use gate::{accepts_mark, accepts_name_edit, accepts_start};

// Crate-level exports - status projection
pub use status::status_line;
