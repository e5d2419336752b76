//! # Move Engine
//!
//! The single-tile movement rule. Unlike classic 2048 the whole board never
//! shifts: exactly one user-selected tile slides in the chosen direction
//! until it hits the edge, an occupied cell it cannot enter, or an
//! equal-valued tile it merges with. At most one merge happens per move and
//! movement halts immediately after it.
//!
//! The moving tile survives every merge (it becomes the doubled tile), so a
//! move never destroys the selection.

use crate::core::board::{Board, Coord};

/// One of the four compass directions a tile can slide in, resolved once at
/// the input-decoding boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The neighbouring coordinate one step along `self`, or `None` past the
    /// edge of a `size` x `size` board.
    fn step(self, from: Coord, size: usize) -> Option<Coord> {
        let (dr, dc) = self.delta();
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Coord::new(row, col))
    }
}

/// What a single call to [`move_selected`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the tile changed position at all.
    pub moved: bool,
    /// Score gained: the doubled value of the single merge, or 0.
    pub gained: u32,
    /// Where the moving tile ended up, i.e. the selection to keep.
    pub selection: Option<Coord>,
}

impl MoveOutcome {
    fn unmoved(selection: Option<Coord>) -> Self {
        Self {
            moved: false,
            gained: 0,
            selection,
        }
    }
}

/// Slide the tile at `selected` as far as it goes in `direction`.
///
/// The tile passes through empty cells and may merge once with an equal
/// neighbour, which ends the move. With no selection, or a selection
/// pointing at an empty cell, the board is left untouched; the latter also
/// clears the returned selection, restoring the invariant that a selection
/// always names a non-zero cell.
pub fn move_selected(
    board: &mut Board,
    selected: Option<Coord>,
    direction: Direction,
) -> MoveOutcome {
    let Some(start) = selected else {
        return MoveOutcome::unmoved(None);
    };
    if board.get(start) == 0 {
        return MoveOutcome::unmoved(None);
    }

    let mut current = start;
    let mut moved = false;
    let mut gained = 0;
    let mut merged_this_move = false;

    loop {
        let Some(next) = direction.step(current, board.size()) else {
            break;
        };
        let value = board.get(current);
        let neighbour = board.get(next);

        if neighbour == 0 {
            board.set(next, value);
            board.set(current, 0);
            current = next;
            moved = true;
            continue;
        }
        if neighbour == value && !merged_this_move {
            let doubled = value * 2;
            board.set(next, doubled);
            board.set(current, 0);
            gained += doubled;
            current = next;
            moved = true;
            merged_this_move = true;
        }
        // Blocked: unequal neighbour, or the one allowed merge already
        // happened.
        break;
    }

    // The moved value always ends in `current`; a zero there would mean the
    // tile vanished, which the algorithm above cannot produce.
    let selection = (board.get(current) != 0).then_some(current);
    MoveOutcome {
        moved,
        gained,
        selection,
    }
}
