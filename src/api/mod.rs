//! Resource clients, one per API section.
//!
//! Each client validates inputs locally, builds a request descriptor,
//! and runs it through transport -> classifier -> entity mapping.

mod chats;
mod me;
mod messages;
mod updates;

pub use chats::Chats;
pub use me::Me;
pub use messages::{EditMessageOptions, Messages, SendMessageOptions};
pub use updates::{PollParams, Updates, WebhookOptions};

use reqwest::Method;
use serde_json::Value;

use crate::error::MaxError;
use crate::response::classify;
use crate::transport::HttpTransport;

/// Run one request through the full pipeline: transport, then
/// classification. Entity mapping stays with the caller, which knows
/// the expected shape.
pub(crate) async fn execute(
    transport: &dyn HttpTransport,
    method: Method,
    path: &str,
    query: &[(String, String)],
    json: Option<&Value>,
) -> Result<Value, MaxError> {
    let raw = transport.send(method, path, query, json).await?;
    classify(raw.status, &raw.body)
}

/// Decode a top-level JSON array, mapping each element.
pub(crate) fn map_array<T>(
    data: &Value,
    entity: &str,
    map: impl Fn(&Value) -> Result<T, MaxError>,
) -> Result<Vec<T>, MaxError> {
    data.as_array()
        .ok_or_else(|| MaxError::Decode(format!("{entity}: expected a JSON array")))?
        .iter()
        .map(map)
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::Method;
    use serde_json::Value;

    use crate::error::MaxError;
    use crate::transport::{HttpTransport, RawResponse};

    /// One request as the mock saw it.
    #[derive(Debug, Clone)]
    pub(crate) struct RecordedCall {
        pub method: Method,
        pub path: String,
        pub query: Vec<(String, String)>,
        pub json: Option<Value>,
    }

    /// Scripted transport: pops canned responses in order and records
    /// every call for assertions.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: Mutex<VecDeque<RawResponse>>,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
            self.responses.lock().unwrap().push_back(RawResponse {
                status,
                body: body.into(),
            });
            self
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn send(
            &self,
            method: Method,
            path: &str,
            query: &[(String, String)],
            json: Option<&Value>,
        ) -> Result<RawResponse, MaxError> {
            self.calls.lock().unwrap().push(RecordedCall {
                method,
                path: path.to_string(),
                query: query.to_vec(),
                json: json.cloned(),
            });
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| MaxError::Transport("mock: no response scripted".into()))
        }
    }
}
