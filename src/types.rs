//! Typed MAX API entities and their JSON mapping.
//!
//! Mapping is done by explicit `from_value` constructors instead of
//! serde derives: a missing required field must fail with a
//! [`MaxError::Decode`] naming both the entity and the field, and the
//! recursive reply chain on [`Message`] needs an explicit depth guard.

use serde_json::Value;
use tracing::warn;

use crate::error::MaxError;

/// Hard cap on `reply_to_message` nesting. The wire format does not
/// bound it, so adversarial payloads must not be allowed to recurse
/// arbitrarily deep.
pub const MAX_REPLY_DEPTH: usize = 50;

fn require<'a>(data: &'a Value, entity: &str, field: &str) -> Result<&'a Value, MaxError> {
    match data.get(field) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(MaxError::Decode(format!(
            "{entity}: missing required field `{field}`"
        ))),
    }
}

fn require_i64(data: &Value, entity: &str, field: &str) -> Result<i64, MaxError> {
    require(data, entity, field)?.as_i64().ok_or_else(|| {
        MaxError::Decode(format!("{entity}: field `{field}` is not an integer"))
    })
}

fn require_str(data: &Value, entity: &str, field: &str) -> Result<String, MaxError> {
    require(data, entity, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MaxError::Decode(format!("{entity}: field `{field}` is not a string")))
}

/// Optional string field: absent and null both map to `None`, never
/// to an empty string, so "unset" stays distinguishable from "empty".
/// A present value of any other type is a decode failure, not a
/// silent `None`.
fn optional_str(data: &Value, entity: &str, field: &str) -> Result<Option<String>, MaxError> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| MaxError::Decode(format!("{entity}: field `{field}` is not a string"))),
    }
}

/// A bot or user account, as the server reported it at fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub username: String,
    pub is_bot: bool,
    pub last_activity_time: i64,
}

impl User {
    pub fn from_value(data: &Value) -> Result<Self, MaxError> {
        Ok(Self {
            user_id: require_i64(data, "user", "user_id")?,
            name: require_str(data, "user", "name")?,
            username: require_str(data, "user", "username")?,
            is_bot: data.get("is_bot").and_then(Value::as_bool).unwrap_or(false),
            last_activity_time: require_i64(data, "user", "last_activity_time")?,
        })
    }
}

/// A chat snapshot. `chat_type` is an open string tag from the server
/// ("private", "group", "channel", ...); unknown values pass through.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Chat {
    pub fn from_value(data: &Value) -> Result<Self, MaxError> {
        Ok(Self {
            id: require_i64(data, "chat", "id")?,
            chat_type: require_str(data, "chat", "type")?,
            title: optional_str(data, "chat", "title")?,
            username: optional_str(data, "chat", "username")?,
            first_name: optional_str(data, "chat", "first_name")?,
            last_name: optional_str(data, "chat", "last_name")?,
        })
    }
}

/// A message with its owning chat embedded. `reply_to` carries the
/// full ancestor chain the server sent, one boxed level per hop.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    pub date: i64,
    pub text: String,
    pub format: Option<String>,
    /// Opaque attachment payloads, not modeled further.
    pub attachments: Option<Vec<Value>>,
    pub reply_to: Option<Box<Message>>,
}

impl Message {
    pub fn from_value(data: &Value) -> Result<Self, MaxError> {
        Self::from_value_at(data, 0)
    }

    fn from_value_at(data: &Value, depth: usize) -> Result<Self, MaxError> {
        if depth > MAX_REPLY_DEPTH {
            return Err(MaxError::Decode(format!(
                "message: reply chain exceeds maximum depth of {MAX_REPLY_DEPTH}"
            )));
        }

        let from = match data.get("from") {
            Some(v) if !v.is_null() => Some(User::from_value(v)?),
            _ => None,
        };

        let attachments = data
            .get("attachments")
            .and_then(Value::as_array)
            .map(|items| items.to_vec());

        let reply_to = match data.get("reply_to_message") {
            Some(v) if !v.is_null() => Some(Box::new(Self::from_value_at(v, depth + 1)?)),
            _ => None,
        };

        Ok(Self {
            id: require_i64(data, "message", "id")?,
            chat: Chat::from_value(require(data, "message", "chat")?)?,
            from,
            date: require_i64(data, "message", "date")?,
            text: optional_str(data, "message", "text")?.unwrap_or_default(),
            format: optional_str(data, "message", "format")?,
            attachments,
            reply_to,
        })
    }

    /// Number of ancestors in the reply chain.
    pub fn reply_chain_len(&self) -> usize {
        let mut len = 0;
        let mut current = self.reply_to.as_deref();
        while let Some(msg) = current {
            len += 1;
            current = msg.reply_to.as_deref();
        }
        len
    }
}

/// Which event a polled update carries. Exactly one message field is
/// populated per update on the wire; modeling it as a tagged enum
/// makes that exclusivity structural on our side.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateKind {
    Message(Message),
    EditedMessage(Message),
    ChannelPost(Message),
    EditedChannelPost(Message),
    /// None of the four message fields were present.
    Unknown,
}

/// One entry from the update stream. `update_id` is assigned
/// monotonically by the server; callers advance their poll offset
/// past the highest id they have seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub update_id: i64,
    pub kind: UpdateKind,
    /// Raw callback-query payload, passed through unmodeled.
    pub callback_query: Option<Value>,
}

/// Message fields in precedence order, highest first.
const UPDATE_KIND_FIELDS: [&str; 4] = [
    "message",
    "edited_message",
    "channel_post",
    "edited_channel_post",
];

impl Update {
    pub fn from_value(data: &Value) -> Result<Self, MaxError> {
        let update_id = require_i64(data, "update", "update_id")?;

        let present: Vec<&str> = UPDATE_KIND_FIELDS
            .iter()
            .copied()
            .filter(|f| matches!(data.get(*f), Some(v) if !v.is_null()))
            .collect();

        // The server is trusted to set exactly one kind; if it ever
        // sets several, keep the highest-precedence one.
        if present.len() > 1 {
            warn!(
                "update {update_id} has {} message kinds set ({:?}), keeping `{}`",
                present.len(),
                present,
                present[0]
            );
        }

        let kind = match present.first() {
            Some(&field) => {
                let message = Message::from_value(&data[field])?;
                match field {
                    "message" => UpdateKind::Message(message),
                    "edited_message" => UpdateKind::EditedMessage(message),
                    "channel_post" => UpdateKind::ChannelPost(message),
                    _ => UpdateKind::EditedChannelPost(message),
                }
            }
            None => UpdateKind::Unknown,
        };

        let callback_query = match data.get("callback_query") {
            Some(v) if !v.is_null() => Some(v.clone()),
            _ => None,
        };

        Ok(Self {
            update_id,
            kind,
            callback_query,
        })
    }
}

/// Text format tag for outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    Markdown,
    Html,
}

impl MessageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}
