//! Trello webhook payload shapes and the interpreted result.
//!
//! Every field is optional: the payload is third-party input and most
//! deliveries are for action types this service ignores.

use serde::{Deserialize, Serialize};

use super::stages::ListKey;

pub const CREATE_CARD: &str = "createCard";
pub const UPDATE_CARD: &str = "updateCard";

/// Outer `{"action": ..., "model": ...}` envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub action: Option<RawActionEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActionEvent {
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub member_creator: Option<MemberRef>,
    #[serde(default)]
    pub data: Option<ActionData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    #[serde(default)]
    pub card: Option<CardRef>,
    /// Set on `createCard`.
    #[serde(default)]
    pub list: Option<ListRef>,
    /// Set on `updateCard` when the card moved between lists.
    #[serde(default)]
    pub list_before: Option<ListRef>,
    #[serde(default)]
    pub list_after: Option<ListRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl ListRef {
    pub fn identifier(&self, key: ListKey) -> Option<&str> {
        match key {
            ListKey::Name => self.name.as_deref(),
            ListKey::Id => self.id.as_deref(),
        }
    }
}

impl RawActionEvent {
    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    pub fn actor_name(&self) -> Option<&str> {
        self.member_creator.as_ref()?.full_name.as_deref()
    }

    pub fn card_name(&self) -> Option<&str> {
        self.data.as_ref()?.card.as_ref()?.name.as_deref()
    }

    /// `createCard` or `updateCard`.
    pub fn is_card_event(&self) -> bool {
        matches!(self.action_type(), Some(CREATE_CARD) | Some(UPDATE_CARD))
    }
}

/// Parse a raw request body into an action. Returns `None` for anything that
/// is not a JSON object of the expected shape.
pub fn parse_action(body: &[u8]) -> Option<RawActionEvent> {
    match serde_json::from_slice::<WebhookPayload>(body) {
        Ok(payload) => payload.action,
        Err(e) => {
            tracing::debug!(error = %e, "Webhook body is not a Trello action payload");
            None
        }
    }
}

/// Interpreted card event, ready to be turned into a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationFact {
    pub actor_name: String,
    pub verb_phrase: String,
    pub subject_name: String,
}

impl NotificationFact {
    pub fn message(&self) -> String {
        format!(
            "{} just {} {}",
            self.actor_name, self.verb_phrase, self.subject_name
        )
    }
}
