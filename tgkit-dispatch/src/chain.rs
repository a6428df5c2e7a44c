//! Ordered handler chain.
//!
//! Handlers run in registration order for each update; the first error aborts
//! the remaining handlers for that update only. Callers may rely on the
//! ordering for validation-then-action handler pairs.

use std::sync::Arc;

use async_trait::async_trait;
use tgkit_core::error::HandlerError;
use tgkit_core::traits::{BotApi, Handler};
use tgkit_core::types::Update;
use tracing::{debug, info};

/// Append-only chain of [`Handler`]s. Built before the loop starts; immutable
/// during a dispatch pass; cloning is cheap (handlers are shared).
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain. An empty chain accepts every update without
    /// observable effect.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler. Registration order is execution order.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the chain for one update. Stops at the first failing handler and
    /// returns its error; the next update starts from the top again.
    pub async fn handle(
        &self,
        bot: &dyn BotApi,
        update: &Update,
    ) -> Result<(), HandlerError> {
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            debug!(
                update_id = update.id,
                handler = %handler_name,
                "step: handler processing"
            );
            if let Err(err) = handler.handle(bot, update).await {
                info!(
                    update_id = update.id,
                    handler = %handler_name,
                    "step: handler chain stopped by handler error"
                );
                return Err(err);
            }
            debug!(
                update_id = update.id,
                handler = %handler_name,
                "step: handler done"
            );
        }
        Ok(())
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler that accepts every update without acting on it. Useful for wiring
/// checks and for running the loop as a pure offset consumer.
pub struct NoOpHandler;

#[async_trait]
impl Handler for NoOpHandler {
    async fn handle(&self, _bot: &dyn BotApi, update: &Update) -> Result<(), HandlerError> {
        debug!(update_id = update.id, kind = update.kind.name(), "update observed");
        Ok(())
    }
}
