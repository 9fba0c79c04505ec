//! Timeout helpers used across the crate.
//!
//! `Deadline` backs both the transaction reply window and the session's
//! no-note timer, which is pushed back every time a bill is stacked.

use std::time::{Duration, Instant};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// A point in time a fixed window after the last `restart`.
///
/// A window too large to represent as an `Instant` never expires.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    window: Duration,
    expires_at: Option<Instant>,
}

impl Deadline {
    pub fn after(window: Duration) -> Self {
        Self {
            window,
            expires_at: Instant::now().checked_add(window),
        }
    }

    /// Push the deadline back by a full window from now.
    pub fn restart(&mut self) {
        self.expires_at = Instant::now().checked_add(self.window);
    }

    pub fn remaining(&self) -> Duration {
        match self.expires_at {
            Some(at) => at.saturating_duration_since(Instant::now()),
            None => Duration::MAX,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
