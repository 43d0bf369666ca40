// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Naming convention: Base* for trait names (e.g., BaseChatService)

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::registration::RegistrationRequest;

// =============================================================================
// Chat Service Trait (Infrastructure - room notifications)
// =============================================================================

#[async_trait]
pub trait BaseChatService: Send + Sync {
    /// Post a plain-text message to a chat room as `sender`
    async fn message_room(&self, room_id: &str, sender: &str, message: &str) -> Result<()>;
}

// =============================================================================
// Board Service Trait (Infrastructure - webhook registration)
// =============================================================================

/// HTTP outcome of a registration call; any status is a valid answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait BaseBoardService: Send + Sync {
    /// Create or replace the webhook described by `request`.
    /// Errors only on transport failure.
    async fn register_webhook(&self, request: &RegistrationRequest) -> Result<BoardResponse>;
}
