use serde::{Deserialize, Serialize};

/// Body for `PUT /1/token/{token}/webhooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhook {
    #[serde(rename = "idModel")]
    pub id_model: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

/// Raw outcome of a webhook registration call.
///
/// Trello answers non-200 for bad tokens, unknown boards and unreachable
/// callbacks; callers decide what to do with the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}
