//! Win detection for tic-tac-toe.

use crate::cell::Cell;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight index-triples that constitute a win.
pub type Line = [Cell; 3];

/// The eight winning lines in authoritative order: rows, columns, diagonals.
///
/// `detect_win` returns the FIRST matching line in this order; the order is
/// part of the contract, not an implementation detail.
pub const LINES: [Line; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// A detected win: the mark that won and the line it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: Line,
}

/// Scans the board for a completed line.
///
/// Returns the first line (in [`LINES`] order) whose three squares hold the
/// same mark, or `None` if no line is complete - regardless of whether the
/// board is full.
#[instrument]
pub fn detect_win(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Taken(mark) = board.get(a)
            && board.get(b) == Square::Taken(mark)
            && board.get(c) == Square::Taken(mark)
        {
            return Some(Win { mark, line });
        }
    }

    None
}
