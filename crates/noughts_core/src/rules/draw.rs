//! Full-board detection.

use super::super::{Board, Square};

/// Checks if every square is occupied.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
