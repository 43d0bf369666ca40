//! Registration domain - announces our callback URL to Trello
//!
//! Registration runs once per process, on a background task started by the
//! first inbound request, so the listener is already serving when Trello
//! probes the callback with `HEAD`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::kernel::BaseBoardService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub board_id: String,
    pub callback_url: String,
    pub api_key: String,
    pub api_token: String,
}

#[derive(Clone)]
pub struct WebhookRegistrar {
    board: Arc<dyn BaseBoardService>,
    request: RegistrationRequest,
}

impl WebhookRegistrar {
    pub fn new(board: Arc<dyn BaseBoardService>, request: RegistrationRequest) -> Self {
        Self { board, request }
    }

    /// Register the webhook. Returns true iff Trello answered 200.
    ///
    /// Never retries; the outcome is only logged.
    pub async fn register_once(&self) -> bool {
        match self.board.register_webhook(&self.request).await {
            Ok(resp) if resp.status == 200 => {
                info!(board_id = %self.request.board_id, "Registering webhook at Trello worked");
                true
            }
            Ok(resp) => {
                error!(
                    status = resp.status,
                    body = %resp.body,
                    "Failed to register webhook at Trello"
                );
                false
            }
            Err(e) => {
                error!(error = %e, "Failed to reach Trello for webhook registration");
                false
            }
        }
    }
}

/// One-shot latch that starts registration on the first request.
#[derive(Debug, Default)]
pub struct RegistrationTrigger {
    fired: AtomicBool,
}

impl RegistrationTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Spawn `registrar.register_once()` the first time this is called.
    /// Later calls do nothing. Returns whether a task was spawned.
    pub fn fire(&self, registrar: &WebhookRegistrar) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        let registrar = registrar.clone();
        tokio::spawn(async move {
            registrar.register_once().await;
        });
        true
    }
}
