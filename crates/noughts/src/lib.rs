//! Noughts - terminal tic-tac-toe.
//!
//! # Architecture
//!
//! - **CLI**: clap commands for playing and for one-off move analysis
//! - **Config**: TOML settings for turn length, computer pacing and logging
//! - **TUI**: ratatui front-end that owns the game session and its timers
//! - **Report**: scored move listing behind `noughts best-move`
//!
//! The game itself lives in [`noughts_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, MarkArg, ModeArg};

// Crate-level exports - Configuration
pub use config::{ConfigError, NoughtsConfig};

// Crate-level exports - Analysis
pub use report::MoveReport;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, FollowUp, ScheduledTask, TimerMessage, action_for, move_cursor, run_tui,
};
