//! Minimal client for the HipChat v1 REST API.
//!
//! Only room messages are supported:
//!
//! ```rust,ignore
//! use hipchat::{HipChatOptions, HipChatService};
//!
//! let hipchat = HipChatService::new(HipChatOptions::new("token".into()))?;
//! hipchat.message_room("engineering", "Trello", "hello").await?;
//! ```

use std::time::Duration;

pub mod error;
pub mod models;

pub use error::{HipChatError, Result};
pub use models::{MessageResponse, RoomMessage};

pub const DEFAULT_BASE_URL: &str = "https://api.hipchat.com";

#[derive(Debug, Clone)]
pub struct HipChatOptions {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl HipChatOptions {
    pub fn new(token: String) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct HipChatService {
    client: reqwest::Client,
    options: HipChatOptions,
}

impl HipChatService {
    pub fn new(options: HipChatOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()?;
        Ok(Self { client, options })
    }

    fn message_url(&self) -> String {
        format!(
            "{}/v1/rooms/message",
            self.options.base_url.trim_end_matches('/')
        )
    }

    /// Post a plain-text message to a room.
    pub async fn message_room(
        &self,
        room_id: &str,
        sender: &str,
        message: &str,
    ) -> Result<MessageResponse> {
        let form = RoomMessage {
            room_id,
            from: sender,
            message,
            message_format: "text",
            notify: 0,
        };

        tracing::debug!(room_id, sender, "Posting message to HipChat");

        let resp = self
            .client
            .post(self.message_url())
            .query(&[("format", "json"), ("auth_token", self.options.token.as_str())])
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HipChatError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json::<MessageResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_url_strips_trailing_slash() {
        let service = HipChatService::new(
            HipChatOptions::new("t".into()).with_base_url("http://localhost:9000/"),
        )
        .unwrap();
        assert_eq!(service.message_url(), "http://localhost:9000/v1/rooms/message");
    }

    #[test]
    fn test_room_message_form_encoding() {
        let form = RoomMessage {
            room_id: "42",
            from: "Trello",
            message: "Ada just finished Ship it",
            message_format: "text",
            notify: 0,
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["room_id"], "42");
        assert_eq!(json["from"], "Trello");
        assert_eq!(json["notify"], 0);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let service = HipChatService::new(
            HipChatOptions::new("t".into())
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(Duration::from_millis(500)),
        )
        .unwrap();
        let err = service.message_room("1", "Trello", "hi").await.unwrap_err();
        assert!(matches!(err, HipChatError::Http(_)));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        let service = HipChatService::new(
            HipChatOptions::new("SUPERSECRETTOKEN".into())
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(Duration::from_millis(500)),
        )
        .unwrap();
        let err = service.message_room("1", "Trello", "hi").await.unwrap_err();
        assert!(!err.to_string().contains("SUPERSECRETTOKEN"));
        assert!(!format!("{:?}", err).contains("SUPERSECRETTOKEN"));
    }
}
