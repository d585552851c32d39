//! Noughts - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, MarkArg, MoveReport, NoughtsConfig, run_tui};
use noughts_core::{Board, GameMode};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = NoughtsConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { mode } => {
            let mode = mode.map(GameMode::from).unwrap_or(*config.default_mode());
            run_tui(config, mode).await
        }
        Command::BestMove {
            board,
            computer,
            json,
        } => {
            init_stderr_tracing();
            run_best_move(&board, computer, json)
        }
    }
}

/// One-off commands log to stderr so stdout stays clean for the report.
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the computer's choice for a board.
#[instrument]
fn run_best_move(board: &str, computer: MarkArg, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;
    info!(%board, "Analyzing board");

    let report = MoveReport::analyze(board, computer.into());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
