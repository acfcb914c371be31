//! Tests for the cell enum.

use tictactoe_core::{Board, Cell, Mark, Square};

#[test]
fn test_cell_to_index() {
    assert_eq!(Cell::TopLeft.to_index(), 0);
    assert_eq!(Cell::Center.to_index(), 4);
    assert_eq!(Cell::BottomRight.to_index(), 8);
}

#[test]
fn test_cell_from_index() {
    assert_eq!(Cell::from_index(0), Some(Cell::TopLeft));
    assert_eq!(Cell::from_index(4), Some(Cell::Center));
    assert_eq!(Cell::from_index(8), Some(Cell::BottomRight));
    assert_eq!(Cell::from_index(9), None);
}

#[test]
fn test_all_matches_board_order() {
    for (index, cell) in Cell::ALL.into_iter().enumerate() {
        assert_eq!(cell.to_index(), index);
    }
}

#[test]
fn test_open_cells_on_empty_board() {
    let board = Board::new();
    assert_eq!(Cell::open(&board).len(), 9);
}

#[test]
fn test_open_cells_filters_taken() {
    let mut board = Board::new();
    board.set(Cell::TopLeft, Square::Taken(Mark::X));
    board.set(Cell::Center, Square::Taken(Mark::O));

    let open = Cell::open(&board);
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Cell::TopLeft));
    assert!(!open.contains(&Cell::Center));
    assert!(open.contains(&Cell::BottomRight));
}
