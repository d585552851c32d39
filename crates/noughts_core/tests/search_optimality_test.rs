//! The computer never loses.

use noughts_core::{
    Board, GameMode, GameSession, Mark, Outcome, Position, Square, best_move, evaluate,
};

/// Plays every possible opponent line against the search and returns the
/// number of finished games, failing on any computer loss.
fn explore(session: &GameSession, computer: Mark) -> usize {
    if !session.is_active() {
        assert_ne!(
            session.outcome(),
            Outcome::Win(computer.opponent()),
            "computer lost:\n{}",
            session.board()
        );
        return 1;
    }

    if session.current_mark() == computer {
        let mut next = session.clone();
        let position = best_move(next.board(), computer).expect("running game has a move");
        assert!(!next.place_mark(position.to_index()).is_empty());
        explore(&next, computer)
    } else {
        session
            .board()
            .empty_positions()
            .map(|position| {
                let mut next = session.clone();
                next.place_mark(position.to_index());
                explore(&next, computer)
            })
            .sum()
    }
}

#[test]
fn test_never_loses_moving_second() {
    let session = GameSession::new(GameMode::HumanVsHuman);
    let games = explore(&session, Mark::O);
    assert!(games > 0);
}

#[test]
fn test_never_loses_moving_first() {
    let session = GameSession::new(GameMode::HumanVsHuman);
    let games = explore(&session, Mark::X);
    assert!(games > 0);
}

#[test]
fn test_never_loses_through_session_api() {
    fn walk(session: &GameSession) {
        if !session.is_active() {
            assert_ne!(session.outcome(), Outcome::Win(Mark::X));
            return;
        }
        if session.is_computer_turn() {
            let mut next = session.clone();
            assert!(!next.play_computer_move().is_empty());
            walk(&next);
        } else {
            for position in session.board().empty_positions() {
                let mut next = session.clone();
                next.place_mark(position.to_index());
                walk(&next);
            }
        }
    }

    walk(&GameSession::new(GameMode::HumanVsComputer));
}

#[test]
fn test_self_play_draws() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    while evaluate(&board) == Outcome::InProgress {
        let position = best_move(&board, mark).expect("running game has a move");
        board.set(position, Square::Occupied(mark));
        mark = mark.opponent();
    }
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_takes_win_instead_of_blocking() {
    let board: Board = "OO.XX....".parse().unwrap();
    assert_eq!(best_move(&board, Mark::O), Some(Position::TopRight));
}

#[test]
fn test_blocks_opponent_line() {
    let board: Board = "XX..O....".parse().unwrap();
    assert_eq!(best_move(&board, Mark::O), Some(Position::TopRight));
}
