//! Terminal UI.
//!
//! The UI owns the session (through [`App`]) and every timer. Key presses,
//! countdown ticks and the computer's delayed move all arrive in one loop
//! and are applied strictly in order.

mod app;
mod input;
mod timer;
mod ui;

pub use app::{App, FollowUp};
pub use input::{Action, action_for, move_cursor};
pub use timer::{ScheduledTask, TimerMessage};

use crate::config::NoughtsConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::GameMode;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the player quits.
#[instrument(skip(config))]
pub async fn run_tui(config: NoughtsConfig, mode: GameMode) -> Result<()> {
    init_file_tracing(&config)?;
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &config, mode).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Logs go to a file so they don't draw over the board.
fn init_file_tracing(config: &NoughtsConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,noughts=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

async fn run_app(terminal: &mut Term, config: &NoughtsConfig, mode: GameMode) -> Result<()> {
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let mut timers = Timers {
        countdown: ScheduledTask::new(),
        computer: ScheduledTask::new(),
        tx: timer_tx,
    };
    let computer_delay = Duration::from_millis(*config.computer_delay_ms());

    let mut app = App::new(mode, *config.turn_seconds());
    timers.countdown.every(SECOND, timers.tx.clone());

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Follow-ups apply before the next message is checked, so a tick
        // queued by a countdown that was just restarted is seen as stale.
        while let Ok(message) = timer_rx.try_recv() {
            let follow_up = match message {
                TimerMessage::Tick(generation) if timers.countdown.is_current(generation) => {
                    app.handle_tick()
                }
                TimerMessage::ComputerMove(generation)
                    if timers.computer.is_current(generation) =>
                {
                    timers.computer.cancel();
                    app.handle_computer_move()
                }
                stale => {
                    debug!(?stale, "Dropping message from a replaced timer");
                    continue;
                }
            };
            timers.apply(follow_up);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key.code)
        {
            let follow_up = app.handle_action(action);
            if follow_up.quit {
                info!("User quit");
                return Ok(());
            }
            timers.apply(follow_up);
        }

        if !app.session().is_active() {
            timers.countdown.cancel();
        }
        if app.computer_should_move() && !timers.computer.is_pending() {
            timers
                .computer
                .once(computer_delay, TimerMessage::ComputerMove, timers.tx.clone());
        }
    }
}

const SECOND: Duration = Duration::from_secs(1);

/// The countdown and computer-move timers sharing one channel.
struct Timers {
    countdown: ScheduledTask,
    computer: ScheduledTask,
    tx: mpsc::UnboundedSender<TimerMessage>,
}

impl Timers {
    fn apply(&mut self, follow_up: FollowUp) {
        if follow_up.cancel_computer {
            self.computer.cancel();
        }
        if follow_up.restart_countdown {
            self.countdown.every(SECOND, self.tx.clone());
        }
    }
}
