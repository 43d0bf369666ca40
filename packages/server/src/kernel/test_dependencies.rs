// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseBoardService, BaseChatService, BoardResponse, ServerDeps};
use crate::domains::registration::RegistrationRequest;

// =============================================================================
// Mock Chat Service
// =============================================================================

/// A message captured by [`MockChatService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub room_id: String,
    pub sender: String,
    pub message: String,
}

#[derive(Default)]
pub struct MockChatService {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    fail_with: Option<String>,
    delay: Option<Duration>,
}

impl MockChatService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send fail (the attempt is still recorded)
    pub fn failing(mut self, error: impl Into<String>) -> Self {
        self.fail_with = Some(error.into());
        self
    }

    /// Hold every send for `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all messages that were sent
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseChatService for MockChatService {
    async fn message_room(&self, room_id: &str, sender: &str, message: &str) -> Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            room_id: room_id.to_string(),
            sender: sender.to_string(),
            message: message.to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.fail_with {
            Some(error) => Err(anyhow::anyhow!("{}", error)),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Mock Board Service
// =============================================================================

pub struct MockBoardService {
    status: u16,
    body: String,
    unreachable: bool,
    calls: Arc<Mutex<Vec<RegistrationRequest>>>,
}

impl MockBoardService {
    pub fn new() -> Self {
        Self {
            status: 200,
            body: r#"{"id":"webhook1","active":true}"#.to_string(),
            unreachable: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer every registration with this status and body
    pub fn with_response(mut self, status: u16, body: impl Into<String>) -> Self {
        self.status = status;
        self.body = body.into();
        self
    }

    /// Fail every registration at the transport level
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    /// Get all registration requests received
    pub fn calls(&self) -> Vec<RegistrationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockBoardService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseBoardService for MockBoardService {
    async fn register_webhook(&self, request: &RegistrationRequest) -> Result<BoardResponse> {
        self.calls.lock().unwrap().push(request.clone());
        if self.unreachable {
            anyhow::bail!("connection refused");
        }
        Ok(BoardResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub chat: Arc<MockChatService>,
    pub board: Arc<MockBoardService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            chat: Arc::new(MockChatService::new()),
            board: Arc::new(MockBoardService::new()),
        }
    }

    /// Set a mock chat service
    pub fn mock_chat(mut self, chat: MockChatService) -> Self {
        self.chat = Arc::new(chat);
        self
    }

    /// Set a mock board service
    pub fn mock_board(mut self, board: MockBoardService) -> Self {
        self.board = Arc::new(board);
        self
    }

    /// Convert into ServerDeps, keeping handles to the mocks in `self`
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.chat.clone(), self.board.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
