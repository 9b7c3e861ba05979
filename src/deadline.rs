use std::time::{Duration, Instant};

/// A single time budget shared by every model call of one command.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Deadline {
            expires_at: Instant::now() + timeout,
        }
    }

    /// Time left before expiry, or `None` once the budget is spent.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .checked_duration_since(Instant::now())
            .filter(|left| !left.is_zero())
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_none()
    }
}
