//! One-shot splash timer driven by a host clock.
//!
//! # Invariants
//! - Fires at most once.
//! - A cancelled timer never fires.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Waiting,
    Fired,
    Cancelled,
}

/// Accumulates elapsed time until the splash delay is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashTimer {
    delay: Duration,
    elapsed: Duration,
    state: TimerState,
}

impl SplashTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            state: TimerState::Waiting,
        }
    }

    /// Adds `elapsed` time; returns `true` on the single firing tick.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.state != TimerState::Waiting {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(elapsed);
        if self.elapsed >= self.delay {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    /// Stops the timer; later `advance` calls never fire.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Waiting {
            self.state = TimerState::Cancelled;
        }
    }

    /// Time left before firing, zero once fired or cancelled.
    pub fn remaining(&self) -> Duration {
        match self.state {
            TimerState::Waiting => self.delay.saturating_sub(self.elapsed),
            TimerState::Fired | TimerState::Cancelled => Duration::ZERO,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == TimerState::Cancelled
    }
}
