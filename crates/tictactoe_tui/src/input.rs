//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Cell;

/// Moves the board cursor one cell in the arrow direction, stopping at the
/// board edges. Any other key leaves the cursor in place.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        _ => (row, col),
    };

    Cell::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Cell::Center, KeyCode::Up), Cell::TopCenter);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Down), Cell::BottomCenter);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Left), Cell::MiddleLeft);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Right), Cell::MiddleRight);
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(move_cursor(Cell::TopLeft, KeyCode::Up), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::TopLeft, KeyCode::Left), Cell::TopLeft);
        assert_eq!(move_cursor(Cell::BottomRight, KeyCode::Down), Cell::BottomRight);
        assert_eq!(move_cursor(Cell::BottomRight, KeyCode::Right), Cell::BottomRight);
    }

    #[test]
    fn test_other_keys_do_not_move() {
        assert_eq!(move_cursor(Cell::Center, KeyCode::Enter), Cell::Center);
        assert_eq!(move_cursor(Cell::Center, KeyCode::Char('x')), Cell::Center);
    }
}
