//! Long-poll dispatch loop.
//!
//! Fetch a batch at the current offset, run the handler chain for each update
//! in platform order, then advance the offset past the highest id seen. Fetch
//! errors are retried with backoff and an unchanged offset; handler errors are
//! scoped to their update and never stop the loop.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use tgkit_core::error::{BotError, Result};
use tgkit_core::traits::BotApi;

use crate::backoff::{Backoff, BackoffConfig};
use crate::chain::HandlerChain;
use crate::source::UpdateSource;

/// Polling parameters. Defaults mirror the platform's recommended long poll:
/// batches of up to 100 updates, 120-second server-side hold.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub limit: u32,
    pub poll_timeout_secs: u64,
    pub backoff: BackoffConfig,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            limit: 100,
            poll_timeout_secs: 120,
            backoff: BackoffConfig::default(),
        }
    }
}

/// Drives the poll/handle cycle.
///
/// Single logical thread of control: the fetch, the per-update chains, and the
/// offset all live on one task. The offset is "lowest update id not yet
/// confirmed consumed"; it advances per update regardless of handler outcome,
/// so one misbehaving handler cannot force the same update to be redelivered
/// forever.
pub struct Dispatcher {
    source: Arc<dyn UpdateSource>,
    api: Arc<dyn BotApi>,
    chain: HandlerChain,
    config: PollerConfig,
    offset: AtomicI64,
}

impl Dispatcher {
    pub fn new(
        source: Arc<dyn UpdateSource>,
        api: Arc<dyn BotApi>,
        chain: HandlerChain,
        config: PollerConfig,
    ) -> Self {
        Self {
            source,
            api,
            chain,
            config,
            offset: AtomicI64::new(0),
        }
    }

    /// Resumes from a previously acknowledged offset. Updates at or above it
    /// are re-delivered by the platform (at-least-once across restarts).
    pub fn with_offset(self, offset: i64) -> Self {
        self.offset.store(offset, Ordering::SeqCst);
        self
    }

    /// Lowest update id not yet confirmed consumed. Non-decreasing.
    pub fn offset(&self) -> i64 {
        self.offset.load(Ordering::SeqCst)
    }

    /// Runs until `cancel` fires (clean stop, returns `Ok`) or the configured
    /// retry ceiling is hit (returns [`BotError::RetryExhausted`]). Cancellation
    /// is observed at every poll and backoff await point.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        info!(offset = self.offset(), "long polling started");
        let mut backoff = Backoff::new(self.config.backoff.clone());
        loop {
            let offset = self.offset();
            let fetched = tokio::select! {
                _ = cancel.cancelled() => {
                    info!(offset, "long polling cancelled");
                    return Ok(());
                }
                result = self.source.get_updates(
                    offset,
                    self.config.limit,
                    self.config.poll_timeout_secs,
                ) => result,
            };

            match fetched {
                Err(err) => {
                    let Some(delay) = backoff.next_delay() else {
                        error!(
                            error = %err,
                            attempts = backoff.attempts(),
                            "retry limit reached, stopping"
                        );
                        return Err(BotError::RetryExhausted {
                            attempts: backoff.attempts(),
                            last: err.to_string(),
                        });
                    };
                    warn!(
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        offset,
                        "getUpdates failed, backing off"
                    );
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            info!(offset, "long polling cancelled");
                            return Ok(());
                        }
                        _ = sleep(delay) => {}
                    }
                }
                Ok(updates) => {
                    backoff.reset();
                    if updates.is_empty() {
                        continue;
                    }
                    info!(count = updates.len(), offset, "dispatching batch");
                    for update in &updates {
                        if let Err(err) = self.chain.handle(self.api.as_ref(), update).await {
                            let err = BotError::Handler(err);
                            error!(update_id = update.id, error = %err, "handler chain failed");
                        }
                        self.advance_past(update.id);
                    }
                }
            }
        }
    }

    // offset = max(offset, id + 1); the max guard keeps a stray low id from
    // regressing the offset.
    fn advance_past(&self, update_id: i64) {
        self.offset.fetch_max(update_id + 1, Ordering::SeqCst);
    }
}
