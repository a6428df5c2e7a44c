//! Trait seams between handlers and the transport.
//!
//! [`BotApi`] is the send-side surface handlers call; the HTTP client implements
//! it, and tests can substitute another impl. [`Handler`] is one step of the
//! dispatch chain.

use crate::error::{HandlerError, Result};
use crate::types::{Message, Update};
use async_trait::async_trait;

/// Send-side Telegram operations available to handlers.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message>;
    /// Sends a reply in the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<Message>;
    /// Forwards a message from one chat to another.
    async fn forward_message(
        &self,
        chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
    ) -> Result<Message>;
    /// Sends a sticker by file id or URL.
    async fn send_sticker(&self, chat_id: i64, sticker: &str) -> Result<Message>;
}

/// A single step of the dispatch chain.
///
/// Returning an error aborts the remaining handlers for the current update
/// only; the next update starts the chain from the top.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(
        &self,
        bot: &dyn BotApi,
        update: &Update,
    ) -> std::result::Result<(), HandlerError>;
}
