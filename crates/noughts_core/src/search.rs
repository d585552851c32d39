//! Optimal move search.
//!
//! Exhaustive minimax over the full game tree. The tree is at most nine
//! plies deep with at most nine branches, so no pruning or caching is
//! needed. Scores are from the computer's side: `+1` for a computer win,
//! `-1` for a loss, `0` for a draw.

use super::rules;
use super::{Board, Mark, Outcome, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A legal root move and the minimax score it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where the computer would play.
    pub position: Position,
    /// Score under optimal play by both sides.
    pub score: i8,
}

/// Returns the best square for `computer` to play, or `None` on a full board.
///
/// Ties go to the lowest index. The caller's board is not modified.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, computer: Mark) -> Option<Position> {
    let mut best: Option<ScoredMove> = None;
    for candidate in score_moves(board, computer) {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    debug!(?best, "Search finished");
    best.map(|m| m.position)
}

/// Scores every empty square for `computer`, in scan order.
///
/// Each score is the value of the position after the computer plays there
/// and the opponent replies optimally.
#[instrument(skip(board))]
pub fn score_moves(board: &Board, computer: Mark) -> Vec<ScoredMove> {
    let mut scratch = board.clone();
    let candidates: Vec<Position> = board.empty_positions().collect();

    candidates
        .into_iter()
        .map(|position| {
            scratch.set(position, Square::Occupied(computer));
            let score = minimax(&mut scratch, computer, false);
            scratch.set(position, Square::Empty);
            ScoredMove { position, score }
        })
        .collect()
}

/// Scores `board` with `computer` to move when `maximizing`, otherwise the
/// opponent. Every placement is undone before returning.
fn minimax(board: &mut Board, computer: Mark, maximizing: bool) -> i8 {
    match rules::evaluate(board) {
        Outcome::Win(mark) if mark == computer => return 1,
        Outcome::Win(_) => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let mover = if maximizing {
        computer
    } else {
        computer.opponent()
    };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        board.set(position, Square::Occupied(mover));
        let score = minimax(board, computer, !maximizing);
        board.set(position, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
