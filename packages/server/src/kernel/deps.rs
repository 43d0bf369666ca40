//! Server dependencies (using traits for testability)
//!
//! External services are held behind trait objects so tests can swap in the
//! mocks from `test_dependencies`.

use anyhow::Result;
use async_trait::async_trait;
use hipchat::HipChatService;
use std::sync::Arc;
use trello::{CreateWebhook, TrelloClient};

use crate::domains::registration::RegistrationRequest;
use crate::kernel::{BaseBoardService, BaseChatService, BoardResponse};

// =============================================================================
// HipChatService Adapter (implements BaseChatService trait)
// =============================================================================

/// Wrapper around HipChatService that implements BaseChatService trait
pub struct HipChatAdapter(pub Arc<HipChatService>);

impl HipChatAdapter {
    pub fn new(service: Arc<HipChatService>) -> Self {
        Self(service)
    }
}

#[async_trait]
impl BaseChatService for HipChatAdapter {
    async fn message_room(&self, room_id: &str, sender: &str, message: &str) -> Result<()> {
        self.0
            .message_room(room_id, sender, message)
            .await
            .map(|_| ())
            .map_err(|e| anyhow::anyhow!("{}", e))
    }
}

// =============================================================================
// TrelloClient Adapter (implements BaseBoardService trait)
// =============================================================================

pub struct TrelloAdapter(pub Arc<TrelloClient>);

impl TrelloAdapter {
    pub fn new(client: Arc<TrelloClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseBoardService for TrelloAdapter {
    async fn register_webhook(&self, request: &RegistrationRequest) -> Result<BoardResponse> {
        let body = CreateWebhook {
            id_model: request.board_id.clone(),
            callback_url: request.callback_url.clone(),
        };
        let resp = self
            .0
            .put_webhook(&request.api_token, &request.api_key, &body)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        Ok(BoardResponse {
            status: resp.status,
            body: resp.body,
        })
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// External services shared by every request handler
#[derive(Clone)]
pub struct ServerDeps {
    pub chat: Arc<dyn BaseChatService>,
    pub board: Arc<dyn BaseBoardService>,
}

impl ServerDeps {
    pub fn new(chat: Arc<dyn BaseChatService>, board: Arc<dyn BaseBoardService>) -> Self {
        Self { chat, board }
    }
}
