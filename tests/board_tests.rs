//! Board scenarios driven through the public API.

use blockdrop::core::{Board, Piece};
use blockdrop::types::{PieceKind, COLS, ROWS};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..COLS as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn pieces_fall_through_a_well_and_stack() {
    let mut board = Board::new();

    // Drop an O down the left edge by stepping until blocked.
    let mut piece = Piece::spawn(PieceKind::O);
    piece.x = -1; // O offsets start at dx=1, so columns 0 and 1.
    assert!(board.is_valid(&piece));
    while board.is_valid(&piece.moved(0, 1)) {
        piece = piece.moved(0, 1);
    }
    board.lock(&piece);

    // Second O on the same columns rests two rows higher.
    let mut second = Piece::spawn(PieceKind::O);
    second.x = -1;
    while board.is_valid(&second.moved(0, 1)) {
        second = second.moved(0, 1);
    }
    assert_eq!(second.y, piece.y - 2);
}

#[test]
fn locking_into_a_prepared_gap_completes_the_row() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::J);
    board.set(4, 19, None);
    board.set(5, 19, None);

    let mut piece = Piece::spawn(PieceKind::O);
    piece.x = 3; // columns 4 and 5
    while board.is_valid(&piece.moved(0, 1)) {
        piece = piece.moved(0, 1);
    }
    board.lock(&piece);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);

    // The upper half of the O survives the clear and settles on row 19.
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 19), Some(Some(PieceKind::O)));
}

#[test]
fn survivors_keep_their_relative_order_across_a_multi_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 12, PieceKind::I);
    fill_row(&mut board, 14, PieceKind::I);
    board.set(0, 9, Some(PieceKind::T));
    board.set(0, 11, Some(PieceKind::S));
    board.set(0, 13, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[10, 12, 14]);

    // Three rows vanished below each marker's original neighborhood.
    assert_eq!(board.get(0, 12), Some(Some(PieceKind::T)));
    assert_eq!(board.get(0, 13), Some(Some(PieceKind::S)));
    assert_eq!(board.get(0, 14), Some(Some(PieceKind::Z)));
    for y in 0..3 {
        assert!(board.row(y).iter().all(|c| c.is_none()));
    }
}

#[test]
fn board_reports_its_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), COLS);
    assert_eq!(board.height(), ROWS);
    assert_eq!(board.cells().len(), COLS as usize * ROWS as usize);
}
