//! Board tests

use simple_tetris::core::pieces::get_shape;
use simple_tetris::core::{Board, BoardError};
use simple_tetris::types::{ShapeKind, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.width(), DEFAULT_WIDTH);
    assert_eq!(board.height(), DEFAULT_HEIGHT);

    for r in 0..DEFAULT_HEIGHT as i32 {
        for c in 0..DEFAULT_WIDTH as i32 {
            assert_eq!(board.get(r, c), Some(None), "cell ({}, {}) should be empty", r, c);
            assert_eq!(board.is_occupied(r, c), Ok(false));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(20, 10);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert_eq!(
        board.is_occupied(0, 10),
        Err(BoardError::OutOfRange { row: 0, col: 10 })
    );
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(20, 10);

    assert!(board.set(10, 5, Some(ShapeKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(ShapeKind::T)));
    assert_eq!(board.is_occupied(10, 5), Ok(true));

    assert!(board.set(10, 5, None));
    assert_eq!(board.get(10, 5), Some(None));

    assert!(!board.set(-1, 0, Some(ShapeKind::T)));
    assert!(!board.set(20, 0, Some(ShapeKind::T)));
}

#[test]
fn test_non_default_dimensions() {
    let board = Board::new(6, 4);
    assert_eq!(board.cells().len(), 24);
    assert!(board.is_out_of_bounds(6, 0));
    assert!(board.is_out_of_bounds(0, 4));
    assert!(!board.is_out_of_bounds(5, 3));
}

#[test]
fn test_clear_rows_three_and_seven() {
    let mut board = Board::new(20, 10);
    for c in 0..10 {
        board.set(3, c, Some(ShapeKind::I));
        board.set(7, c, Some(ShapeKind::I));
    }
    // Markers in partial rows above, between and below the full ones.
    board.set(1, 0, Some(ShapeKind::T));
    board.set(5, 1, Some(ShapeKind::S));
    board.set(12, 2, Some(ShapeKind::Z));

    assert!(board.is_row_full(3));
    assert!(board.is_row_full(7));

    assert_eq!(board.clear_full_rows(), 2);

    // Rows above row 3 shift down by 2, rows between 3 and 7 by 1, the rest stay.
    assert_eq!(board.get(3, 0), Some(Some(ShapeKind::T)));
    assert_eq!(board.get(6, 1), Some(Some(ShapeKind::S)));
    assert_eq!(board.get(12, 2), Some(Some(ShapeKind::Z)));
    assert_eq!(board.filled_count(), 3);
    assert!(board.row(0).iter().all(|cell| cell.is_none()));
    assert!(board.row(1).iter().all(|cell| cell.is_none()));
    assert!((0..20).all(|r| !board.is_row_full(r)));
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::new(20, 10);
    board.set(19, 0, Some(ShapeKind::Square));
    let before = board.clone();

    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_collision_against_locked_cells() {
    let mut board = Board::new(20, 10);
    let i = get_shape(ShapeKind::I);

    assert!(!board.collides(&i, 16, 0));
    board.set(19, 0, Some(ShapeKind::Square));
    assert!(board.collides(&i, 16, 0));
    assert!(!board.collides(&i, 15, 0));
    // Partially above the top edge.
    assert!(!board.collides(&i, -3, 0));
}

#[test]
fn test_lock_then_clear() {
    let mut board = Board::new(4, 2);
    let square = get_shape(ShapeKind::Square);

    board.lock_piece(&square, 2, 0, ShapeKind::Square);
    assert_eq!(board.filled_count(), 4);
    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.filled_count(), 0);
}
