//! Status projection: derives the display text from the current state.

use crate::state::{GameState, Outcome};

/// Derives the status line for the current state.
///
/// Recomputed on every state change; nothing here is stored. The winner and
/// turn texts include the player's confirmed name and mark.
pub fn status_line(state: &GameState) -> String {
    let Some(roster) = state.roster() else {
        return "Enter player names to start".to_string();
    };

    match state.outcome() {
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::Won(win) => format!("{} ({}) wins!", roster.name(win.mark), win.mark),
        Outcome::InProgress => {
            format!("Next: {} ({})", roster.name(state.turn()), state.turn())
        }
    }
}
