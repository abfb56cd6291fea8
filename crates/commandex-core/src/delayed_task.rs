//! Cancellable one-shot delayed task
//!
//! A deadline, not a timer: `notify` (re)arms it, `cancel` clears it and
//! `poll` reports whether it elapsed. The owner of the clock (the engine
//! runtime, or a test) decides when to poll.

use std::time::{Duration, Instant};

/// Quiet period before a refresh runs
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Pending { deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct DelayedTask {
    delay: Duration,
    state: State,
}

impl DelayedTask {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: State::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm, or re-arm, so the task fires `delay` after `now`
    pub fn notify(&mut self, now: Instant) {
        self.state = State::Pending {
            deadline: now + self.delay,
        };
    }

    /// Drop a pending firing. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = State::Idle;
        was_pending
    }

    /// True exactly once per quiet period, on the first poll at or after the
    /// deadline
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            State::Pending { deadline } if now >= deadline => {
                self.state = State::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Pending { deadline } => Some(deadline),
            State::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }
}

impl Default for DelayedTask {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_DELAY)
    }
}
