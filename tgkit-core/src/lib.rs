//! # tgkit-core
//!
//! Core types and traits for the Telegram client: wire schema mirrors, the
//! [`BotApi`]/[`Handler`] seams, the error taxonomy, and tracing initialization.
//! Transport-agnostic; used by tgkit-api and tgkit-dispatch.

pub mod error;
pub mod logger;
pub mod traits;
pub mod types;

pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use traits::{BotApi, Handler};
pub use types::{
    CallbackQuery, Chat, ChosenInlineResult, InlineQuery, KeyboardButton, Message, MessageEntity,
    ReplyKeyboardMarkup, Update, UpdateKind, User,
};
