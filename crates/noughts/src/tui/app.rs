//! Application state and logic.

use super::input::{Action, move_cursor};
use noughts_core::{GameMode, GameSession, Mark, Outcome, Position, SessionEvent};
use tracing::{debug, instrument};

/// What the UI loop should do after the app handled something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowUp {
    /// A new turn started: restart the countdown timer.
    pub restart_countdown: bool,
    /// Drop any pending computer move (a new game started).
    pub cancel_computer: bool,
    /// Leave the UI loop.
    pub quit: bool,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    seconds_shown: u32,
    celebrating: bool,
}

impl App {
    /// Creates the app with a started game.
    #[instrument]
    pub fn new(mode: GameMode, turn_seconds: u32) -> Self {
        let session = GameSession::with_turn_seconds(mode, turn_seconds);
        Self {
            status_message: start_message(mode),
            seconds_shown: session.seconds_remaining(),
            session,
            cursor: Position::Center,
            celebrating: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Seconds shown on the countdown.
    pub fn seconds_shown(&self) -> u32 {
        self.seconds_shown
    }

    /// True after a win until the next game.
    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    /// True when the computer should be scheduled to move.
    pub fn computer_should_move(&self) -> bool {
        self.session.is_computer_turn()
    }

    /// Applies a key action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) -> FollowUp {
        match action {
            Action::Quit => FollowUp {
                quit: true,
                ..FollowUp::default()
            },
            Action::Cursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                FollowUp::default()
            }
            Action::PlaceAtCursor => self.human_move(self.cursor),
            Action::Place(position) => {
                self.cursor = position;
                self.human_move(position)
            }
            Action::Restart => {
                let events = self.session.reset(self.session.mode());
                self.handle_events(&events)
            }
            Action::ToggleMode => {
                let events = self.session.reset(self.session.mode().toggle());
                self.handle_events(&events)
            }
        }
    }

    /// One second of the countdown elapsed.
    pub fn handle_tick(&mut self) -> FollowUp {
        let events = self.session.tick();
        self.handle_events(&events)
    }

    /// The computer's thinking pause ended.
    #[instrument(skip(self))]
    pub fn handle_computer_move(&mut self) -> FollowUp {
        let events = self.session.play_computer_move();
        self.handle_events(&events)
    }

    fn human_move(&mut self, position: Position) -> FollowUp {
        if self.session.is_computer_turn() {
            debug!(%position, "Ignoring human move during computer's turn");
            return FollowUp::default();
        }
        let events = self.session.place_mark(position.to_index());
        self.handle_events(&events)
    }

    /// Updates the display state from session events.
    pub fn handle_events(&mut self, events: &[SessionEvent]) -> FollowUp {
        let mut follow_up = FollowUp::default();

        for event in events {
            debug!(?event, "Handling session event");
            match *event {
                SessionEvent::MoveMade { position, mark } => {
                    self.status_message = format!("{} played {}", self.name(mark), position);
                    follow_up.restart_countdown = true;
                }
                SessionEvent::Outcome(Outcome::InProgress) => {
                    self.status_message = self.turn_message();
                }
                SessionEvent::Outcome(Outcome::Win(mark)) => {
                    self.celebrating = true;
                    self.status_message = format!(
                        "🎉 {} wins! Press 'r' to restart or 'q' to quit.",
                        self.name(mark)
                    );
                }
                SessionEvent::Outcome(Outcome::Draw) => {
                    self.status_message =
                        "🤝 Draw! Press 'r' to restart or 'q' to quit.".to_string();
                }
                SessionEvent::TurnTick { seconds_remaining } => {
                    self.seconds_shown = seconds_remaining;
                }
                SessionEvent::TurnForced { next } => {
                    self.status_message = format!("Time's up! {}'s turn", self.name(next));
                    follow_up.restart_countdown = true;
                }
                SessionEvent::Reset { mode } => {
                    self.celebrating = false;
                    self.cursor = Position::Center;
                    self.status_message = start_message(mode);
                    follow_up.restart_countdown = true;
                    follow_up.cancel_computer = true;
                }
            }
        }

        if follow_up.restart_countdown {
            self.seconds_shown = self.session.seconds_remaining();
        }
        if self.session.is_computer_turn() {
            self.status_message = "Computer is thinking...".to_string();
        }
        follow_up
    }

    fn name(&self, mark: Mark) -> String {
        match self.session.computer_mark() {
            Some(computer) if computer == mark => "Computer".to_string(),
            Some(_) => format!("You ({})", mark),
            None => format!("Player {}", mark),
        }
    }

    fn turn_message(&self) -> String {
        format!("{}'s turn", self.name(self.session.current_mark()))
    }
}

fn start_message(mode: GameMode) -> String {
    format!("{} - X starts", mode.label())
}
