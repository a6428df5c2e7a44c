//! Wire types mirrored from the Telegram Bot API schema.
//!
//! Field names follow the platform's JSON contract; optional wire fields are
//! `Option`. The schema is versioned externally, so these structs carry only the
//! fields the library and its callers actually touch.

use serde::{Deserialize, Serialize};

/// A Telegram user or bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// A private, group, supergroup, or channel chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Chat ids can exceed 32 bits.
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// An incoming message of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    /// Absent for messages sent to channels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// Unix time the message was sent.
    #[serde(default)]
    pub date: u64,
    pub chat: Chat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_from: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_date: Option<u64>,
    /// The replied-to message; the platform does not nest further replies inside it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<MessageEntity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo: Vec<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticker: Option<Sticker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_chat_member: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chat_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_message: Option<Box<Message>>,
}

/// A special entity in message text (mention, hashtag, bot command, url, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Offset in UTF-16 code units.
    pub offset: i64,
    /// Length in UTF-16 code units.
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// One size of a photo or a file/sticker thumbnail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub file_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

/// A .webp sticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<PhotoSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
}

/// A shared phone contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

/// An incoming inline query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub query: String,
    /// Offset of the results to be returned; controlled by the bot.
    pub offset: String,
}

/// An inline-query result the user chose and sent to their chat partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    pub query: String,
}

/// An incoming callback query from an inline-keyboard button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Absent when the originating message is too old.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_message_id: Option<String>,
    #[serde(default)]
    pub chat_instance: String,
    /// A bad client can send arbitrary data here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_short_name: Option<String>,
}

/// One button of a reply keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
}

/// A custom reply keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(default)]
    pub resize_keyboard: bool,
    #[serde(default)]
    pub one_time_keyboard: bool,
    #[serde(default)]
    pub selective: bool,
}

/// A single incoming update.
///
/// The platform assigns strictly increasing ids and populates at most one
/// payload kind per update; the wire shape is `{"update_id": int, "message"?:
/// {...}, ...}`. The dispatch loop forwards the whole record to handlers without
/// interpreting the kind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawUpdate")]
pub struct Update {
    pub id: i64,
    pub kind: UpdateKind,
}

/// The payload of an [`Update`], one variant per wire key.
///
/// Matching on this is exhaustive by construction; a payload key this library
/// does not know maps to [`UpdateKind::Unknown`] instead of failing the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    InlineQuery(InlineQuery),
    ChosenInlineResult(ChosenInlineResult),
    CallbackQuery(CallbackQuery),
    Unknown,
}

impl UpdateKind {
    /// Wire key the payload arrived under; used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            UpdateKind::Message(_) => "message",
            UpdateKind::EditedMessage(_) => "edited_message",
            UpdateKind::InlineQuery(_) => "inline_query",
            UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::Unknown => "unknown",
        }
    }
}

impl Update {
    /// The incoming message, if this update carries one.
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            UpdateKind::Message(m) | UpdateKind::EditedMessage(m) => Some(m),
            _ => None,
        }
    }
}

/// Wire-shape mirror of an update: the id plus one optional field per payload
/// kind, exactly as the platform sends it.
#[derive(Deserialize)]
struct RawUpdate {
    update_id: i64,
    message: Option<Message>,
    edited_message: Option<Message>,
    inline_query: Option<InlineQuery>,
    chosen_inline_result: Option<ChosenInlineResult>,
    callback_query: Option<CallbackQuery>,
}

impl From<RawUpdate> for Update {
    fn from(raw: RawUpdate) -> Self {
        let kind = if let Some(message) = raw.message {
            UpdateKind::Message(message)
        } else if let Some(message) = raw.edited_message {
            UpdateKind::EditedMessage(message)
        } else if let Some(query) = raw.inline_query {
            UpdateKind::InlineQuery(query)
        } else if let Some(result) = raw.chosen_inline_result {
            UpdateKind::ChosenInlineResult(result)
        } else if let Some(query) = raw.callback_query {
            UpdateKind::CallbackQuery(query)
        } else {
            UpdateKind::Unknown
        };
        Update {
            id: raw.update_id,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_message_deserializes_to_message_kind() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 42,
                "message": {
                    "message_id": 7,
                    "date": 1700000000,
                    "chat": {"id": 99, "type": "private", "first_name": "Ada"},
                    "from": {"id": 99, "first_name": "Ada", "username": "ada"},
                    "text": "hello"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(update.id, 42);
        let message = update.message().expect("message payload");
        assert_eq!(message.message_id, 7);
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert_eq!(message.chat.id, 99);
        assert_eq!(update.kind.name(), "message");
    }

    #[test]
    fn test_update_with_edited_message_deserializes_to_edited_kind() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 43,
                "edited_message": {
                    "message_id": 7,
                    "date": 1700000000,
                    "edit_date": 1700000100,
                    "chat": {"id": 99, "type": "private"},
                    "text": "hello again"
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(update.kind, UpdateKind::EditedMessage(_)));
        assert_eq!(update.message().unwrap().edit_date, Some(1700000100));
    }

    #[test]
    fn test_update_with_callback_query_deserializes() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 44,
                "callback_query": {
                    "id": "cbq1",
                    "from": {"id": 5, "first_name": "Bob"},
                    "chat_instance": "ci",
                    "data": "button-1"
                }
            }"#,
        )
        .unwrap();

        match update.kind {
            UpdateKind::CallbackQuery(query) => {
                assert_eq!(query.id, "cbq1");
                assert_eq!(query.data.as_deref(), Some("button-1"));
            }
            other => panic!("expected callback query, got {:?}", other),
        }
    }

    #[test]
    fn test_update_with_unrecognized_payload_maps_to_unknown() {
        let update: Update = serde_json::from_str(
            r#"{"update_id": 45, "poll_answer": {"poll_id": "p1"}}"#,
        )
        .unwrap();

        assert_eq!(update.id, 45);
        assert_eq!(update.kind, UpdateKind::Unknown);
        assert!(update.message().is_none());
    }

    #[test]
    fn test_update_with_no_payload_maps_to_unknown() {
        let update: Update = serde_json::from_str(r#"{"update_id": 46}"#).unwrap();
        assert_eq!(update.kind, UpdateKind::Unknown);
    }

    #[test]
    fn test_inline_query_update_deserializes() {
        let update: Update = serde_json::from_str(
            r#"{
                "update_id": 47,
                "inline_query": {
                    "id": "iq1",
                    "from": {"id": 5, "first_name": "Bob"},
                    "query": "cats",
                    "offset": ""
                }
            }"#,
        )
        .unwrap();

        assert!(matches!(update.kind, UpdateKind::InlineQuery(ref q) if q.query == "cats"));
    }
}
