//! Noughts core - tic-tac-toe game logic with an unbeatable opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: win/draw detection over the eight [`WIN_PATTERNS`]
//! - **Session**: the [`GameSession`] state machine driven by the UI
//! - **Search**: exhaustive minimax picking the computer's move
//!
//! Nothing here touches the terminal, the clock or the filesystem. The
//! front-end owns timing and rendering and talks to the session through
//! plain method calls and the [`SessionEvent`]s they return.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMode, GameSession, Mark, SessionState};
//!
//! let mut session = GameSession::new(GameMode::HumanVsComputer);
//! session.place_mark(0);
//! session.play_computer_move();
//! assert_eq!(session.state(), SessionState::AwaitingMove(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod countdown;
mod outcome;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use countdown::{Countdown, DEFAULT_TURN_SECONDS, Tick};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WIN_PATTERNS, evaluate};
pub use search::{ScoredMove, best_move, score_moves};
pub use session::{COMPUTER_MARK, GameMode, GameSession, SessionEvent, SessionState};
pub use types::{Board, BoardParseError, Mark, Square};
