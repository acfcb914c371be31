//! Player name entry and the confirmed roster.
//!
//! Names pass through two stages: a [`NameDraft`] holds the transient text
//! of both input fields while the game has not started, and a [`Roster`]
//! holds the trimmed, confirmed names once it has. The two are independent
//! so editing a draft never disturbs a running game.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Maximum length of a player name, in characters.
pub const NAME_MAX: usize = 12;

/// Transient input buffer for the two name fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDraft {
    x: String,
    o: String,
}

impl NameDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current text of the field for `mark`.
    pub fn get(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn field_mut(&mut self, mark: Mark) -> &mut String {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Appends a character to the field for `mark`.
    ///
    /// Characters beyond [`NAME_MAX`] are dropped, mirroring a bounded
    /// input field.
    pub fn push(&mut self, mark: Mark, c: char) {
        let field = self.field_mut(mark);
        if field.chars().count() < NAME_MAX {
            field.push(c);
        }
    }

    /// Removes the last character of the field for `mark`.
    pub fn backspace(&mut self, mark: Mark) {
        self.field_mut(mark).pop();
    }

    /// True when both fields are non-empty after trimming whitespace.
    pub fn is_ready(&self) -> bool {
        !self.x.trim().is_empty() && !self.o.trim().is_empty()
    }

    /// Confirms the draft into a [`Roster`], trimming both names.
    ///
    /// Returns `None` unless [`NameDraft::is_ready`].
    #[instrument(skip(self))]
    pub fn confirm(&self) -> Option<Roster> {
        if !self.is_ready() {
            return None;
        }
        Some(Roster {
            x: self.x.trim().to_string(),
            o: self.o.trim().to_string(),
        })
    }

    /// Clears both fields.
    pub fn clear(&mut self) {
        self.x.clear();
        self.o.clear();
    }
}

/// The confirmed player names, one per mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    x: String,
    o: String,
}

impl Roster {
    /// Returns the name of the player using `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}
