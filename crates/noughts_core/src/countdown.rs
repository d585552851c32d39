//! Per-turn countdown.
//!
//! The countdown only counts; it never schedules anything. Whoever owns the
//! clock calls [`Countdown::tick`] once per second.

use serde::{Deserialize, Serialize};

/// Default seconds a player has to move before the turn passes.
pub const DEFAULT_TURN_SECONDS: u32 = 10;

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time left; the value is what the display should show.
    Remaining(u32),
    /// The display reached zero on this tick: the turn is over.
    Expired,
}

/// Seconds left in the current turn.
///
/// Each tick shows the current value and then decrements it, so a
/// ten-second budget shows 10, 9, ..., 1 and expires on the eleventh tick,
/// the one that shows 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
}

impl Countdown {
    /// Creates a countdown of `duration` seconds, already started.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Full length of a turn in seconds.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Value the next tick will display.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Starts the turn over with the full duration.
    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> Tick {
        if self.remaining == 0 {
            Tick::Expired
        } else {
            let shown = self.remaining;
            self.remaining -= 1;
            Tick::Remaining(shown)
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_then_expires() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Remaining(3));
        assert_eq!(countdown.tick(), Tick::Remaining(2));
        assert_eq!(countdown.tick(), Tick::Remaining(1));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn test_restart_refills() {
        let mut countdown = Countdown::new(5);
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining(), 3);
        countdown.restart();
        assert_eq!(countdown.remaining(), 5);
        assert_eq!(countdown, Countdown::new(5));
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), Tick::Expired);
    }
}
