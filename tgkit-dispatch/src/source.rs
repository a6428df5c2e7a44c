//! Fetch seam between the dispatcher and the API client.

use async_trait::async_trait;
use tgkit_core::error::Result;
use tgkit_core::types::Update;

/// Source of update batches for the dispatch loop.
///
/// The HTTP client is the production impl; tests script batches directly
/// instead of standing up a server.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Fetches pending updates at `offset`, blocking server-side for up to
    /// `timeout` seconds when none are pending.
    async fn get_updates(&self, offset: i64, limit: u32, timeout: u64) -> Result<Vec<Update>>;
}

#[async_trait]
impl UpdateSource for tgkit_api::Client {
    async fn get_updates(&self, offset: i64, limit: u32, timeout: u64) -> Result<Vec<Update>> {
        tgkit_api::Client::get_updates(self, offset, limit, timeout).await
    }
}
