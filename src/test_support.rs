//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::board::{Board, Coord};

/// Build a board from literal rows, e.g. `board_from_rows(&[&[2, 0], &[0, 4]])`.
///
/// Panics on non-square input or unsupported sizes; test boards are always
/// well-formed.
pub fn board_from_rows(rows: &[&[u32]]) -> Board {
    let size = rows.len();
    let mut board = Board::new(size).expect("test boards use supported sizes");
    for (row, values) in rows.iter().enumerate() {
        assert_eq!(values.len(), size, "test board must be square");
        for (col, &value) in values.iter().enumerate() {
            board.set(Coord::new(row, col), value);
        }
    }
    board
}
