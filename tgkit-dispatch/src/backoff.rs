//! Retry pacing for the poll loop: exponential growth with a cap and an
//! optional consecutive-attempt ceiling.

use std::time::Duration;

/// Backoff policy. The default starting interval is the one-second pause the
/// loop has always used; repeated failures grow it up to `max_interval`.
#[derive(Debug, Clone)]
pub struct BackoffConfig {
    pub initial: Duration,
    pub multiplier: f64,
    pub max_interval: Duration,
    /// Consecutive-failure ceiling; `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(1),
            multiplier: 2.0,
            max_interval: Duration::from_secs(60),
            max_attempts: None,
        }
    }
}

/// Mutable backoff state for one run of the loop.
#[derive(Debug)]
pub struct Backoff {
    config: BackoffConfig,
    next: Duration,
    attempts: u32,
}

impl Backoff {
    pub fn new(config: BackoffConfig) -> Self {
        let next = config.initial;
        Self {
            config,
            next,
            attempts: 0,
        }
    }

    /// Records a failure. Returns the delay to sleep before the next attempt,
    /// or `None` when the attempt ceiling is reached.
    pub fn next_delay(&mut self) -> Option<Duration> {
        self.attempts += 1;
        if let Some(max) = self.config.max_attempts {
            if self.attempts >= max {
                return None;
            }
        }
        let delay = self.next;
        self.next = self
            .next
            .mul_f64(self.config.multiplier)
            .min(self.config.max_interval);
        Some(delay)
    }

    /// Consecutive failures recorded since the last reset.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Clears failure state after a successful fetch.
    pub fn reset(&mut self) {
        self.next = self.config.initial;
        self.attempts = 0;
    }
}
