//! Cancellable timers feeding the UI loop.
//!
//! Each timer is a tokio task that sends [`TimerMessage`]s over an
//! unbounded channel. Scheduling a task aborts the one it replaces, so at
//! most one countdown and one pending computer move are live at a time.
//!
//! Messages carry the generation of the task that sent them. A message
//! already queued when its task was replaced or cancelled is stale, and
//! [`ScheduledTask::is_current`] rejects it.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, instrument};

/// Messages timers send to the UI loop, tagged with the sender's generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMessage {
    /// One second of the turn countdown elapsed.
    Tick(u64),
    /// The computer's thinking pause is over.
    ComputerMove(u64),
}

/// Slot holding at most one running task.
#[derive(Debug, Default)]
pub struct ScheduledTask {
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl ScheduledTask {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts the running task, if any, and invalidates its queued messages.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Returns true while a task is scheduled and not cancelled.
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns true if `generation` belongs to the task now in this slot.
    pub fn is_current(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    /// Sends `Tick` every `period`, first one a full period from now.
    /// Replaces the running task.
    #[instrument(skip(self, tx))]
    pub fn every(&mut self, period: Duration, tx: UnboundedSender<TimerMessage>) {
        self.cancel();
        let generation = self.generation;
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(TimerMessage::Tick(generation)).is_err() {
                    debug!("UI loop gone, stopping countdown");
                    break;
                }
            }
        }));
    }

    /// Sends `message(generation)` once after `delay`. Replaces the running task.
    #[instrument(skip(self, message, tx))]
    pub fn once(
        &mut self,
        delay: Duration,
        message: fn(u64) -> TimerMessage,
        tx: UnboundedSender<TimerMessage>,
    ) {
        self.cancel();
        let generation = self.generation;
        self.handle = Some(tokio::spawn(async move {
            sleep(delay).await;
            let _ = tx.send(message(generation));
        }));
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
