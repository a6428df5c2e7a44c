//! HTTP client for the Telegram Bot API.
//!
//! One POST per method call plus the `{ok, description, result}` envelope
//! decoding shared by every binding. Transport does not interpret response
//! bodies; decoding failures and `ok:false` answers are distinct errors.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tgkit_core::error::{BotError, Result};
use tgkit_core::traits::BotApi;
use tgkit_core::types::{Message, Update, User};
use tracing::debug;

use crate::payloads::{
    ForwardMessageRequest, GetUpdatesRequest, SendMessageRequest, SendStickerRequest,
};

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Telegram Bot API client. Holds the bot token (immutable after construction)
/// and a pooled HTTP client; cloning shares the pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

/// Response envelope common to every method.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

impl Client {
    /// Client against the production API host.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API host (tests point this at a mock server).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Performs the single POST for `method` and returns the raw response
    /// bytes. No interpretation of the body happens here.
    pub async fn call_method<P>(&self, method: &str, params: &P) -> Result<Vec<u8>>
    where
        P: Serialize + ?Sized,
    {
        let url = self.method_url(method);
        debug!(method, "calling telegram api");
        let response = self
            .http
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Calls `method` and decodes the envelope. `ok:false` carries the
    /// platform's description verbatim as [`BotError::Api`].
    async fn call<P, T>(&self, method: &str, params: &P) -> Result<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = self.call_method(method, params).await?;
        let envelope: ApiResponse<T> =
            serde_json::from_slice(&raw).map_err(|e| BotError::Decode(e.to_string()))?;
        if !envelope.ok {
            return Err(BotError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }
        envelope
            .result
            .ok_or_else(|| BotError::Decode("ok response without result".to_string()))
    }

    /// Auth-token probe: returns the bot's own identity.
    pub async fn get_me(&self) -> Result<User> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Long-poll fetch of pending updates at `offset`. The call blocks
    /// server-side for up to `timeout` seconds when no updates are pending.
    pub async fn get_updates(&self, offset: i64, limit: u32, timeout: u64) -> Result<Vec<Update>> {
        self.call(
            "getUpdates",
            &GetUpdatesRequest {
                offset,
                limit,
                timeout,
            },
        )
        .await
    }

    /// Sends a text message. On success the sent message is returned.
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<Message> {
        self.call("sendMessage", request).await
    }

    /// Forwards a message of any kind. On success the sent message is returned.
    pub async fn forward_message(&self, request: &ForwardMessageRequest) -> Result<Message> {
        self.call("forwardMessage", request).await
    }

    /// Sends a .webp sticker. On success the sent message is returned.
    pub async fn send_sticker(&self, request: &SendStickerRequest) -> Result<Message> {
        self.call("sendSticker", request).await
    }
}

#[async_trait]
impl BotApi for Client {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<Message> {
        Client::send_message(self, &SendMessageRequest::new(chat_id, text)).await
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<Message> {
        let request = SendMessageRequest {
            reply_to_message_id: Some(message.message_id),
            ..SendMessageRequest::new(message.chat.id, text)
        };
        Client::send_message(self, &request).await
    }

    async fn forward_message(
        &self,
        chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
    ) -> Result<Message> {
        Client::forward_message(self, &ForwardMessageRequest::new(chat_id, from_chat_id, message_id))
            .await
    }

    async fn send_sticker(&self, chat_id: i64, sticker: &str) -> Result<Message> {
        Client::send_sticker(self, &SendStickerRequest::new(chat_id, sticker)).await
    }
}
