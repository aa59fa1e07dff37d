//! `/updates` and `/webhook` — long polling and webhook registration.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value};

use crate::error::MaxError;
use crate::transport::HttpTransport;
use crate::types::Update;

use super::{execute, map_array};

/// Long-poll parameters. Unset fields are omitted from the query and
/// take server-side defaults.
#[derive(Debug, Clone, Default)]
pub struct PollParams {
    /// First update id to return; pass highest-seen id + 1.
    pub offset: Option<i64>,
    /// Maximum updates per response, 1..=100.
    pub limit: Option<u32>,
    /// Long-poll hold time in seconds. The request blocks up to this
    /// long server-side; cancellation is simply not calling again.
    pub timeout_secs: Option<u32>,
    /// Update types to receive, e.g. `["message", "channel_post"]`.
    pub allowed_updates: Option<Vec<String>>,
}

/// Optional fields for [`Updates::set_webhook`].
#[derive(Debug, Clone, Default)]
pub struct WebhookOptions {
    /// Public certificate contents, passed through as-is.
    pub certificate: Option<String>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
}

/// Client for the update stream and webhook registration.
pub struct Updates {
    transport: Arc<dyn HttpTransport>,
}

impl Updates {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// GET /updates — fetch pending updates via long polling.
    pub async fn list(&self, params: &PollParams) -> Result<Vec<Update>, MaxError> {
        if let Some(limit) = params.limit {
            if !(1..=100).contains(&limit) {
                return Err(MaxError::Validation(format!(
                    "limit must be between 1 and 100, got {limit}"
                )));
            }
        }

        let mut query = Vec::new();
        if let Some(offset) = params.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(limit) = params.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(timeout) = params.timeout_secs {
            query.push(("timeout".to_string(), timeout.to_string()));
        }
        if let Some(types) = &params.allowed_updates {
            query.push(("allowed_updates".to_string(), types.join(",")));
        }

        let data = execute(self.transport.as_ref(), Method::GET, "/updates", &query, None).await?;
        map_array(&data, "update list", Update::from_value)
    }

    /// POST /webhook — register a webhook endpoint. The URL must be
    /// secure HTTP.
    pub async fn set_webhook(&self, url: &str, options: &WebhookOptions) -> Result<bool, MaxError> {
        if !url.starts_with("https://") {
            return Err(MaxError::Validation(
                "webhook URL must use HTTPS protocol".into(),
            ));
        }

        let mut body = Map::new();
        body.insert("url".into(), url.into());
        if let Some(certificate) = &options.certificate {
            body.insert("certificate".into(), certificate.clone().into());
        }
        if let Some(max_connections) = options.max_connections {
            body.insert("max_connections".into(), max_connections.into());
        }
        if let Some(types) = &options.allowed_updates {
            body.insert("allowed_updates".into(), types.clone().into());
        }

        execute(
            self.transport.as_ref(),
            Method::POST,
            "/webhook",
            &[],
            Some(&Value::Object(body)),
        )
        .await?;
        Ok(true)
    }

    /// DELETE /webhook — remove the registered webhook.
    pub async fn delete_webhook(&self) -> Result<bool, MaxError> {
        execute(self.transport.as_ref(), Method::DELETE, "/webhook", &[], None).await?;
        Ok(true)
    }

    /// GET /webhook/info — current webhook state, returned raw.
    pub async fn webhook_info(&self) -> Result<Value, MaxError> {
        execute(
            self.transport.as_ref(),
            Method::GET,
            "/webhook/info",
            &[],
            None,
        )
        .await
    }
}
