//! Bounded retry policy for the Author turn.
//!
//! The policy only decides *how many* attempts and *how long* between them;
//! the actual sleeping is the caller's concern, which keeps this crate free
//! of any runtime dependency and keeps tests instant.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Attempt budget and fixed inter-attempt delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts allowed (including the first). Must be at least 1.
    pub max_attempts: u32,
    /// Delay between consecutive attempts, in milliseconds.
    pub delay_ms: u64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay_ms: u64) -> Self {
        Self {
            // A zero budget would mean the Author can never move.
            max_attempts: max_attempts.max(1),
            delay_ms,
        }
    }

    /// Delay to wait after the given (1-indexed) failed attempt.
    ///
    /// Returns `None` once the budget is spent — no further attempt follows.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt < self.max_attempts {
            Some(Duration::from_millis(self.delay_ms))
        } else {
            None
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1_000,
        }
    }
}
