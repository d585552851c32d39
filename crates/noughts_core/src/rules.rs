//! Game rules.
//!
//! Pure functions over a [`Board`]. The session state machine and the
//! move search both judge positions through [`evaluate`], so a line the
//! search sees as won is exactly a line the session reports as won.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_PATTERNS, check_winner};

use super::{Board, Outcome};

/// Classifies the board.
///
/// A completed line wins, even on a full board. Otherwise a full board is
/// a draw and anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
