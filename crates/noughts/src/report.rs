//! Non-interactive move analysis for the `best-move` command.

use derive_getters::Getters;
use noughts_core::{Board, Mark, Outcome, Position, ScoredMove, evaluate, score_moves};
use serde::Serialize;
use std::fmt::Write;
use tracing::instrument;

/// The computer's choice for one board, with the score of every legal move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveReport {
    /// Board that was analyzed.
    board: Board,
    /// Mark the computer plays.
    computer: Mark,
    /// Classification of the board as given.
    outcome: Outcome,
    /// Chosen square, `None` when the game is already over.
    best: Option<Position>,
    /// Every legal move with its score, in scan order.
    moves: Vec<ScoredMove>,
}

impl MoveReport {
    /// Analyzes `board` for `computer`.
    ///
    /// A finished board gets no moves and no choice.
    #[instrument(skip(board), fields(board = %board))]
    pub fn analyze(board: Board, computer: Mark) -> Self {
        let outcome = evaluate(&board);
        let moves = if outcome.is_terminal() {
            Vec::new()
        } else {
            score_moves(&board, computer)
        };
        let best = moves
            .iter()
            .fold(None::<ScoredMove>, |best, m| match best {
                Some(b) if b.score >= m.score => Some(b),
                _ => Some(*m),
            })
            .map(|m| m.position);

        Self {
            board,
            computer,
            outcome,
            best,
            moves,
        }
    }

    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.board);
        match self.best {
            Some(position) => {
                let _ = writeln!(
                    out,
                    "{} plays {} (index {})",
                    self.computer,
                    position,
                    position.to_index()
                );
                for m in &self.moves {
                    let verdict = match m.score {
                        1 => "win",
                        0 => "draw",
                        _ => "loss",
                    };
                    let _ = writeln!(
                        out,
                        "  {:>2}  {:<14} {}",
                        m.position.to_index(),
                        m.position.label(),
                        verdict
                    );
                }
            }
            None => {
                let _ = writeln!(out, "No move: {}", self.outcome);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_matches_search() {
        let board: Board = "XX..O....".parse().unwrap();
        let report = MoveReport::analyze(board.clone(), Mark::O);
        assert_eq!(*report.best(), noughts_core::best_move(&board, Mark::O));
        assert_eq!(report.moves().len(), 6);
        assert!(report.to_text().contains("O plays Top-right (index 2)"));
    }

    #[test]
    fn test_finished_board_has_no_move() {
        let board: Board = "XXXOO....".parse().unwrap();
        let report = MoveReport::analyze(board, Mark::O);
        assert_eq!(*report.outcome(), Outcome::Win(Mark::X));
        assert_eq!(*report.best(), None);
        assert!(report.to_text().contains("No move: X wins"));
    }

    #[test]
    fn test_json_shape() {
        let board: Board = "OO.XX....".parse().unwrap();
        let report = MoveReport::analyze(board, Mark::O);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best"], "TopRight");
        assert_eq!(json["computer"], "O");
        assert_eq!(json["moves"][0]["score"], 1);
    }
}
