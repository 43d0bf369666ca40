//! Minimal Trello REST client covering webhook registration.
//!
//! ```rust,ignore
//! use trello::{CreateWebhook, TrelloClient};
//!
//! let client = TrelloClient::new(trello::DEFAULT_BASE_URL, Duration::from_secs(10))?;
//! let resp = client
//!     .put_webhook("token", "key", &CreateWebhook { id_model, callback_url })
//!     .await?;
//! ```

use std::time::Duration;

pub mod error;
pub mod types;

pub use error::{Result, TrelloError};
pub use types::{CreateWebhook, WebhookResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: reqwest::Client,
    base_url: String,
}

impl TrelloClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn webhooks_url(&self, token: &str) -> String {
        format!("{}/1/token/{}/webhooks", self.base_url, token)
    }

    /// Create or replace the webhook for `id_model` via the token-scoped endpoint.
    ///
    /// PUT is an upsert on Trello's side, so repeating the call with the same
    /// body is harmless. Only transport failures are errors; any HTTP status
    /// is returned to the caller.
    pub async fn put_webhook(
        &self,
        token: &str,
        key: &str,
        webhook: &CreateWebhook,
    ) -> Result<WebhookResponse> {
        let url = self.webhooks_url(token);
        let payload = serde_json::to_string_pretty(webhook)?;
        tracing::debug!(base_url = %self.base_url, payload = %payload, "Registering webhook at Trello");

        let resp = self
            .client
            .put(&url)
            .query(&[("key", key)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(WebhookResponse { status, body })
    }
}
