//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::{GameMode, Mark};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Opponent mode (overrides the config file)
        #[arg(short, long)]
        mode: Option<ModeArg>,
    },

    /// Print the computer's choice for a board
    BestMove {
        /// Nine squares in row-major order: X, O, and . for empty
        #[arg(short, long)]
        board: String,

        /// Mark the computer plays
        #[arg(short, long, default_value = "o")]
        computer: MarkArg,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Opponent mode as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two people share the keyboard
    HumanVsHuman,
    /// Play against the computer
    HumanVsComputer,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::HumanVsHuman => GameMode::HumanVsHuman,
            ModeArg::HumanVsComputer => GameMode::HumanVsComputer,
        }
    }
}

/// Mark as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_mode() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "human-vs-human"]).unwrap();
        match cli.command {
            Command::Play { mode } => assert_eq!(mode, Some(ModeArg::HumanVsHuman)),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_parse_best_move() {
        let cli = Cli::try_parse_from([
            "noughts",
            "best-move",
            "--board",
            "XX..O....",
            "--json",
            "--config",
            "other.toml",
        ])
        .unwrap();
        match cli.command {
            Command::BestMove {
                board,
                computer,
                json,
            } => {
                assert_eq!(board, "XX..O....");
                assert_eq!(Mark::from(computer), Mark::O);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["noughts", "play", "--mode", "easy"]).is_err());
    }
}
