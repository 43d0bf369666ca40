//! Turns a Trello card action into a [`NotificationFact`].

use tracing::debug;

use super::models::{ListRef, NotificationFact, RawActionEvent, CREATE_CARD, UPDATE_CARD};
use super::stages::WorkflowStageMap;

/// Interpret a card action against the configured stages.
///
/// Returns `None` for action types other than `createCard`/`updateCard` and
/// for payloads missing the actor, the card or the destination list. Those
/// are routine (Trello sends every board action), so they are only logged at
/// debug level.
pub fn interpret(action: &RawActionEvent, stages: &WorkflowStageMap) -> Option<NotificationFact> {
    let Some(action_type) = action.action_type() else {
        debug!("Trello action has no type, ignoring");
        return None;
    };

    let Some(list) = destination_list(action, action_type) else {
        debug!(action_type, "Trello action has no destination list, probably not a card move");
        return None;
    };

    let Some(list_id) = list.identifier(stages.key) else {
        debug!(action_type, key = ?stages.key, "Destination list lacks the configured key");
        return None;
    };

    debug!(list = list_id, "Card in list");

    let verb_phrase = match stages.resolve(list_id) {
        Some(stage) => stage.verb_phrase().to_string(),
        None => format!("used unconfigured list {}", list_id),
    };

    let (Some(actor_name), Some(subject_name)) = (action.actor_name(), action.card_name()) else {
        debug!(action_type, "Trello action is missing actor or card name");
        return None;
    };

    Some(NotificationFact {
        actor_name: actor_name.to_string(),
        verb_phrase,
        subject_name: subject_name.to_string(),
    })
}

/// The list a card was created in, or moved into.
fn destination_list<'a>(action: &'a RawActionEvent, action_type: &str) -> Option<&'a ListRef> {
    let data = action.data.as_ref()?;
    match action_type {
        CREATE_CARD => data.list.as_ref(),
        UPDATE_CARD => {
            if let Some(before) = data.list_before.as_ref() {
                debug!(from = ?before.name, "Card left list");
            }
            data.list_after.as_ref()
        }
        _ => None,
    }
}
