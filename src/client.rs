//! Client facade tying config, transport, and resource clients
//! together.

use std::sync::Arc;

use crate::api::{Chats, Me, Messages, Updates};
use crate::config::Config;
use crate::error::MaxError;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Entry point to the MAX API.
///
/// Holds the immutable config and a shared transport; the resource
/// accessors hand out lightweight clients over that transport. Safe
/// to share across tasks.
pub struct Client {
    config: Config,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Build a client with the production `reqwest` transport.
    pub fn new(config: Config) -> Result<Self, MaxError> {
        let transport = Arc::new(ReqwestTransport::new(&config)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Bot identity operations.
    pub fn me(&self) -> Me {
        Me::new(self.transport.clone())
    }

    /// Message operations.
    pub fn messages(&self) -> Messages {
        Messages::new(self.transport.clone())
    }

    /// Chat operations.
    pub fn chats(&self) -> Chats {
        Chats::new(self.transport.clone())
    }

    /// Update polling and webhook registration.
    pub fn updates(&self) -> Updates {
        Updates::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;

    #[test]
    fn test_client_builds_with_default_transport() {
        let client = Client::new(Config::new("token")).unwrap();
        assert_eq!(client.config().base_url(), "https://platform-api.max.ru");
    }

    #[tokio::test]
    async fn test_resources_share_injected_transport() {
        let mock = Arc::new(
            MockTransport::new()
                .respond(
                    200,
                    r#"{"user_id":1,"name":"n","username":"u","last_activity_time":0}"#,
                )
                .respond(200, "[]"),
        );
        let client = Client::with_transport(Config::new("token"), mock.clone());

        client.me().get().await.unwrap();
        client.chats().list(&[]).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].path, "/me");
        assert_eq!(calls[1].path, "/chats");
    }
}
