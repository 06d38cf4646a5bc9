//! Whole-second turn countdown.
//!
//! The timer is driven from outside: the presentation layer calls
//! `Match::tick` once per second. A cancelled timer ignores ticks, so a
//! countdown left over from a settled turn can never expire it.

use serde::{Deserialize, Serialize};

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Not running; nothing happened.
    Idle,
    /// Still counting, with this many seconds left.
    Running(u32),
    /// Reached zero on this tick. Reported once.
    Expired,
}

/// How close the turn is to running out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// More than half the time left.
    Calm,
    /// More than a quarter left.
    Warning,
    Critical,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTimer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl TurnTimer {
    /// A stopped timer with a full countdown.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Reset to the full duration and start counting.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = self.duration > 0;
    }

    /// Stop counting. The remaining time is kept.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            TimerEvent::Expired
        } else {
            TimerEvent::Running(self.remaining)
        }
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn urgency(&self) -> Urgency {
        if self.remaining * 2 > self.duration {
            Urgency::Calm
        } else if self.remaining * 4 > self.duration {
            Urgency::Warning
        } else {
            Urgency::Critical
        }
    }
}
