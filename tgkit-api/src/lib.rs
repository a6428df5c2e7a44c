//! # tgkit-api
//!
//! Transport and method bindings for the Telegram Bot API: a reqwest-based
//! [`Client`] that POSTs JSON to `https://api.telegram.org/bot<token>/<method>`
//! and decodes the `{ok, description, result}` envelope. The client also
//! implements [`tgkit_core::BotApi`] so handlers depend on the trait, not on
//! this crate.

mod client;
mod payloads;

pub use client::{Client, DEFAULT_BASE_URL};
pub use payloads::{
    ForwardMessageRequest, GetUpdatesRequest, SendMessageRequest, SendStickerRequest,
};
