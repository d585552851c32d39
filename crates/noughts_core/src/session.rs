//! Game session state machine.
//!
//! A [`GameSession`] owns the board, whose turn it is, whether a game is
//! running and the opponent mode. Every operation returns the
//! [`SessionEvent`]s it raised; an empty list means the request was
//! rejected and nothing changed. Invalid requests (occupied square, index
//! off the board, game not running) are ignored rather than reported as
//! errors, since they come straight from clicks and key presses.

use super::countdown::{Countdown, DEFAULT_TURN_SECONDS, Tick};
use super::{Board, Mark, Outcome, Position, Square, rules, search};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The mark the computer plays in [`GameMode::HumanVsComputer`].
///
/// The human always moves first as [`Mark::X`].
pub const COMPUTER_MARK: Mark = Mark::O;

/// Who sits across the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the board.
    HumanVsHuman,
    /// One person against the search.
    #[default]
    HumanVsComputer,
}

impl GameMode {
    /// Returns display label.
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

/// Observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No game has been started yet.
    NotStarted,
    /// Waiting for this mark to move.
    AwaitingMove(Mark),
    /// Game over, this mark completed a line.
    Won(Mark),
    /// Game over, board full.
    Draw,
}

/// Notification raised by a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A mark was placed.
    MoveMade {
        /// Square that was filled.
        position: Position,
        /// Mark placed there.
        mark: Mark,
    },
    /// Board classified after a move.
    Outcome(Outcome),
    /// One second of the turn countdown elapsed.
    TurnTick {
        /// Value to display.
        seconds_remaining: u32,
    },
    /// The turn passed without a move.
    TurnForced {
        /// Mark that moves next.
        next: Mark,
    },
    /// A fresh game started.
    Reset {
        /// Mode of the new game.
        mode: GameMode,
    },
}

/// One game of noughts and crosses, reset in place between games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_mark: Mark,
    active: bool,
    mode: GameMode,
    outcome: Outcome,
    countdown: Countdown,
}

impl GameSession {
    /// Creates a session with a game already started, X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_turn_seconds(mode, DEFAULT_TURN_SECONDS)
    }

    /// Creates a started session with a custom turn length.
    #[instrument]
    pub fn with_turn_seconds(mode: GameMode, turn_seconds: u32) -> Self {
        let mut session = Self::idle(turn_seconds);
        session.start(mode);
        session
    }

    /// Creates a session in the not-started state.
    pub fn idle(turn_seconds: u32) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            active: false,
            mode: GameMode::default(),
            outcome: Outcome::InProgress,
            countdown: Countdown::new(turn_seconds),
        }
    }

    fn start(&mut self, mode: GameMode) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.active = true;
        self.mode = mode;
        self.outcome = Outcome::InProgress;
        self.countdown.restart();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next (meaningful while active).
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns true while a game is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the opponent mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the outcome of the last evaluated position.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the value the countdown will show on its next tick.
    pub fn seconds_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Returns the configured turn length in seconds.
    pub fn turn_seconds(&self) -> u32 {
        self.countdown.duration()
    }

    /// Returns the computer's mark, `None` in two-human games.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::HumanVsComputer => Some(COMPUTER_MARK),
            GameMode::HumanVsHuman => None,
        }
    }

    /// Returns true when a running game waits on the computer.
    pub fn is_computer_turn(&self) -> bool {
        self.active && self.computer_mark() == Some(self.current_mark)
    }

    /// Returns the current phase.
    pub fn state(&self) -> SessionState {
        if self.active {
            return SessionState::AwaitingMove(self.current_mark);
        }
        if let Some(mark) = self.outcome.winner() {
            return SessionState::Won(mark);
        }
        if self.outcome == Outcome::Draw {
            SessionState::Draw
        } else {
            SessionState::NotStarted
        }
    }

    /// Classifies the current board.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Ignored when no game is running, the index is off the board or the
    /// square is taken. On success the outcome is evaluated: a finished game
    /// stops, otherwise the turn passes and the countdown restarts.
    #[instrument(skip(self), fields(mark = ?self.current_mark))]
    pub fn place_mark(&mut self, index: usize) -> Vec<SessionEvent> {
        if !self.active {
            debug!("Ignoring move, no game running");
            return Vec::new();
        }
        let Some(position) = Position::from_index(index) else {
            debug!("Ignoring move, index off the board");
            return Vec::new();
        };
        if !self.board.is_empty(position) {
            debug!(%position, "Ignoring move, square occupied");
            return Vec::new();
        }

        let mark = self.current_mark;
        self.board.set(position, Square::Occupied(mark));
        let outcome = self.evaluate_outcome();
        self.outcome = outcome;

        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.active = false;
        } else {
            self.current_mark = mark.opponent();
            self.countdown.restart();
        }

        vec![
            SessionEvent::MoveMade { position, mark },
            SessionEvent::Outcome(outcome),
        ]
    }

    /// Passes the turn without a move, as when the countdown runs out.
    #[instrument(skip(self), fields(mark = ?self.current_mark))]
    pub fn force_turn_change(&mut self) -> Vec<SessionEvent> {
        if !self.active {
            debug!("Ignoring forced turn change, no game running");
            return Vec::new();
        }

        self.current_mark = self.current_mark.opponent();
        self.countdown.restart();
        info!(next = ?self.current_mark, "Turn forced");

        vec![SessionEvent::TurnForced {
            next: self.current_mark,
        }]
    }

    /// Starts a fresh game in `mode`.
    ///
    /// The result equals `GameSession::with_turn_seconds(mode, self.turn_seconds())`
    /// whatever happened before.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) -> Vec<SessionEvent> {
        self.start(mode);
        info!("Game reset");
        vec![SessionEvent::Reset { mode }]
    }

    /// Advances the turn countdown by one second.
    ///
    /// When the display reaches zero the turn is forced over on the same tick.
    #[instrument(skip(self))]
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if !self.active {
            return Vec::new();
        }

        match self.countdown.tick() {
            Tick::Remaining(seconds_remaining) => {
                vec![SessionEvent::TurnTick { seconds_remaining }]
            }
            Tick::Expired => {
                let mut events = vec![SessionEvent::TurnTick {
                    seconds_remaining: 0,
                }];
                events.extend(self.force_turn_change());
                events
            }
        }
    }

    /// Picks the computer's move.
    ///
    /// `None` unless a human-vs-computer game is running and the computer
    /// is to move.
    #[instrument(skip(self))]
    pub fn request_computer_move(&self) -> Option<Position> {
        if !self.is_computer_turn() {
            debug!("Ignoring computer move request, not the computer's turn");
            return None;
        }

        let choice = search::best_move(&self.board, self.current_mark);
        debug_assert!(choice.is_some(), "running game must have an empty square");
        choice
    }

    /// Picks the computer's move and plays it.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Vec<SessionEvent> {
        match self.request_computer_move() {
            Some(position) => self.place_mark(position.to_index()),
            None => Vec::new(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::idle(DEFAULT_TURN_SECONDS)
    }
}
