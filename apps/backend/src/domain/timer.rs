//! Per-turn countdown.
//!
//! The timer never reads the clock itself; callers pass `now` so tests and the
//! turn clock agree on time.

use std::time::{Duration, Instant};

/// Default time a player has to act.
pub const DEFAULT_TURN_DURATION: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimer {
    budget: Duration,
    started_at: Instant,
}

impl TurnTimer {
    pub fn new(budget: Duration, now: Instant) -> Self {
        Self {
            budget,
            started_at: now,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Restart the countdown at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.started_at = now;
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    pub fn is_turn_over(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    pub fn minutes_left(&self, now: Instant) -> u64 {
        self.remaining(now).as_secs() / 60
    }

    pub fn seconds_left(&self, now: Instant) -> u64 {
        self.remaining(now).as_secs() % 60
    }
}
