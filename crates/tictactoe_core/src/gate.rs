//! Input gate: pure predicates deciding which actions are accepted.
//!
//! [`GameState::apply`](crate::GameState::apply) consults these before every
//! transition, and the renderer consults the same predicates to derive
//! control disabled-ness, so policy and presentation cannot drift apart.
//! Restart (and the presentation-only theme toggle) have no predicate: they
//! are always accepted.

use crate::cell::Cell;
use crate::state::GameState;

/// A mark may be placed iff the game has started, the outcome is
/// unresolved, and the target cell is empty.
pub fn accepts_mark(state: &GameState, cell: Cell) -> bool {
    state.started() && !state.outcome().is_resolved() && state.board().is_empty(cell)
}

/// Name fields may be edited iff the game has not yet started.
pub fn accepts_name_edit(state: &GameState) -> bool {
    !state.started()
}

/// The start action is accepted iff the game has not yet started and both
/// pending name fields are non-empty after trimming.
pub fn accepts_start(state: &GameState) -> bool {
    !state.started() && state.draft().is_ready()
}
