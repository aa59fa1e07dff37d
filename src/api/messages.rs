//! `/messages` — sending, fetching, editing, deleting messages.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::MaxError;
use crate::transport::HttpTransport;
use crate::types::{Message, MessageFormat};

use super::execute;

/// Optional fields for [`Messages::send`]. Fields left as `None` are
/// omitted from the request body entirely; omission and explicit null
/// are distinct to the server.
#[derive(Debug, Clone, Default)]
pub struct SendMessageOptions {
    pub format: Option<MessageFormat>,
    pub attachments: Option<Vec<Value>>,
    pub reply_to_message_id: Option<i64>,
    pub disable_notification: Option<bool>,
}

/// Optional fields for [`Messages::edit`].
#[derive(Debug, Clone, Default)]
pub struct EditMessageOptions {
    pub format: Option<MessageFormat>,
    pub attachments: Option<Vec<Value>>,
}

/// Client for message operations.
pub struct Messages {
    transport: Arc<dyn HttpTransport>,
}

impl Messages {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// POST /messages — send a message to a chat.
    pub async fn send(
        &self,
        chat_id: i64,
        text: &str,
        options: &SendMessageOptions,
    ) -> Result<Message, MaxError> {
        if text.is_empty() {
            return Err(MaxError::Validation("message text cannot be empty".into()));
        }

        let mut body = Map::new();
        body.insert("chat_id".into(), chat_id.into());
        body.insert("text".into(), text.into());
        if let Some(format) = options.format {
            body.insert("format".into(), format.as_str().into());
        }
        if let Some(attachments) = &options.attachments {
            body.insert("attachments".into(), attachments.clone().into());
        }
        if let Some(reply_to) = options.reply_to_message_id {
            body.insert("reply_to_message_id".into(), reply_to.into());
        }
        if let Some(disable) = options.disable_notification {
            body.insert("disable_notification".into(), disable.into());
        }

        let data = execute(
            self.transport.as_ref(),
            Method::POST,
            "/messages",
            &[],
            Some(&Value::Object(body)),
        )
        .await?;
        Message::from_value(&data)
    }

    /// GET /messages/{id} — fetch a single message.
    pub async fn get(&self, message_id: i64, chat_id: i64) -> Result<Message, MaxError> {
        let query = vec![("chat_id".to_string(), chat_id.to_string())];
        let data = execute(
            self.transport.as_ref(),
            Method::GET,
            &format!("/messages/{message_id}"),
            &query,
            None,
        )
        .await?;
        Message::from_value(&data)
    }

    /// PATCH /messages/{id} — replace a message's text.
    pub async fn edit(
        &self,
        message_id: i64,
        chat_id: i64,
        new_text: &str,
        options: &EditMessageOptions,
    ) -> Result<Message, MaxError> {
        if new_text.is_empty() {
            return Err(MaxError::Validation("message text cannot be empty".into()));
        }

        let mut body = Map::new();
        body.insert("chat_id".into(), chat_id.into());
        body.insert("text".into(), new_text.into());
        if let Some(format) = options.format {
            body.insert("format".into(), format.as_str().into());
        }
        if let Some(attachments) = &options.attachments {
            body.insert("attachments".into(), attachments.clone().into());
        }

        let data = execute(
            self.transport.as_ref(),
            Method::PATCH,
            &format!("/messages/{message_id}"),
            &[],
            Some(&Value::Object(body)),
        )
        .await?;
        Message::from_value(&data)
    }

    /// DELETE /messages/{id} — delete a message.
    pub async fn delete(&self, message_id: i64, chat_id: i64) -> Result<bool, MaxError> {
        let query = vec![("chat_id".to_string(), chat_id.to_string())];
        execute(
            self.transport.as_ref(),
            Method::DELETE,
            &format!("/messages/{message_id}"),
            &query,
            None,
        )
        .await?;
        Ok(true)
    }
}
