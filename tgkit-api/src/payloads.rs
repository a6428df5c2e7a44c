//! Request payloads for the method bindings. Wire names match the platform
//! schema; optional fields are skipped when unset.

use serde::Serialize;
use tgkit_core::types::ReplyKeyboardMarkup;

/// Body for `getUpdates`.
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    /// Lowest update id to return; ids below it are confirmed consumed.
    pub offset: i64,
    pub limit: u32,
    /// Server-side long-poll hold in seconds.
    pub timeout: u64,
}

/// Body for `sendMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    /// "Markdown" or "HTML".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,
    pub disable_web_page_preview: bool,
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyKeyboardMarkup>,
}

impl SendMessageRequest {
    /// Plain text message to a chat; every option off.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            disable_notification: false,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }
}

/// Body for `forwardMessage`.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessageRequest {
    pub chat_id: i64,
    pub from_chat_id: i64,
    pub disable_notification: bool,
    pub message_id: i64,
}

impl ForwardMessageRequest {
    pub fn new(chat_id: i64, from_chat_id: i64, message_id: i64) -> Self {
        Self {
            chat_id,
            from_chat_id,
            disable_notification: false,
            message_id,
        }
    }
}

/// Body for `sendSticker`. `sticker` is a file id or an HTTP URL to a .webp.
#[derive(Debug, Clone, Serialize)]
pub struct SendStickerRequest {
    pub chat_id: i64,
    pub sticker: String,
    pub disable_notification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

impl SendStickerRequest {
    pub fn new(chat_id: i64, sticker: impl Into<String>) -> Self {
        Self {
            chat_id,
            sticker: sticker.into(),
            disable_notification: false,
            reply_to_message_id: None,
        }
    }
}
