//! Notifications domain - relays interpreted board activity to a chat room

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::domains::webhooks::NotificationFact;
use crate::kernel::BaseChatService;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("chat notification failed: {0}")]
    Send(String),

    #[error("chat notification timed out after {0:?}")]
    Timeout(Duration),
}

/// Where and as whom notifications are posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTarget {
    pub room_id: String,
    pub sender_name: String,
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    chat: Arc<dyn BaseChatService>,
    target: ChatTarget,
    timeout: Duration,
}

impl NotificationDispatcher {
    /// `timeout` bounds each send regardless of how the chat client is built.
    pub fn new(chat: Arc<dyn BaseChatService>, target: ChatTarget, timeout: Duration) -> Self {
        Self {
            chat,
            target,
            timeout,
        }
    }

    /// Send one message for `fact`. A failure here concerns the chat side
    /// only; callers log it and still acknowledge the webhook.
    pub async fn notify(&self, fact: &NotificationFact) -> Result<(), DispatchError> {
        let message = fact.message();
        debug!(room_id = %self.target.room_id, message = %message, "Sending to HipChat");

        let send = self
            .chat
            .message_room(&self.target.room_id, &self.target.sender_name, &message);

        match tokio::time::timeout(self.timeout, send).await {
            Ok(result) => result.map_err(|e| DispatchError::Send(e.to_string())),
            Err(_) => Err(DispatchError::Timeout(self.timeout)),
        }
    }
}
