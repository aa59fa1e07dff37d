//! `/me` — the bot's own identity.

use std::sync::Arc;

use reqwest::Method;

use crate::error::MaxError;
use crate::transport::HttpTransport;
use crate::types::User;

use super::execute;

/// Client for the bot-identity endpoint.
pub struct Me {
    transport: Arc<dyn HttpTransport>,
}

impl Me {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// GET /me — information about the current bot.
    pub async fn get(&self) -> Result<User, MaxError> {
        let data = execute(self.transport.as_ref(), Method::GET, "/me", &[], None).await?;
        User::from_value(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;

    #[tokio::test]
    async fn test_get_me_maps_user() {
        let mock = Arc::new(MockTransport::new().respond(
            200,
            r#"{"user_id":1,"name":"Max Bot","username":"maxbot","is_bot":true,"last_activity_time":1700000000}"#,
        ));
        let me = Me::new(mock.clone());

        let user = me.get().await.unwrap();
        assert_eq!(user.user_id, 1);
        assert_eq!(user.username, "maxbot");

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::GET);
        assert_eq!(calls[0].path, "/me");
        assert!(calls[0].query.is_empty());
        assert!(calls[0].json.is_none());
    }

    #[tokio::test]
    async fn test_get_me_surfaces_api_error() {
        let mock = Arc::new(MockTransport::new().respond(401, r#"{"error":"bad token"}"#));
        let me = Me::new(mock);

        let err = me.get().await.unwrap_err();
        match err {
            MaxError::Api {
                message, status, ..
            } => {
                assert_eq!(message, "bad token");
                assert_eq!(status, 401);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
