//! `/chats` — listing, fetching, and updating chats.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::MaxError;
use crate::transport::HttpTransport;
use crate::types::Chat;

use super::{execute, map_array};

/// Client for chat operations.
pub struct Chats {
    transport: Arc<dyn HttpTransport>,
}

impl Chats {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// GET /chats — list chats the bot participates in. `filter`
    /// pairs are passed through as query parameters.
    pub async fn list(&self, filter: &[(String, String)]) -> Result<Vec<Chat>, MaxError> {
        let data = execute(self.transport.as_ref(), Method::GET, "/chats", filter, None).await?;
        map_array(&data, "chat list", Chat::from_value)
    }

    /// GET /chats/{id} — fetch one chat.
    pub async fn get(&self, chat_id: i64) -> Result<Chat, MaxError> {
        let data = execute(
            self.transport.as_ref(),
            Method::GET,
            &format!("/chats/{chat_id}"),
            &[],
            None,
        )
        .await?;
        Chat::from_value(&data)
    }

    /// PATCH /chats/{id} — update chat fields. Only the keys present
    /// in `fields` are sent; the server treats absent keys as
    /// untouched.
    pub async fn update(&self, chat_id: i64, fields: Map<String, Value>) -> Result<Chat, MaxError> {
        let data = execute(
            self.transport.as_ref(),
            Method::PATCH,
            &format!("/chats/{chat_id}"),
            &[],
            Some(&Value::Object(fields)),
        )
        .await?;
        Chat::from_value(&data)
    }
}
