//! Test fixtures: configuration and signed Trello payloads.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha1::Sha1;
use std::collections::HashMap;
use trello_hipchat::Config;

pub const SECRET: &str = "trello-secret";
pub const CALLBACK_URL: &str = "https://relay.example.org/board_modified";

/// Config with every stage bound by list name
pub fn test_config() -> Config {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("TRELLO_SECRET", SECRET),
        ("CALLBACK_URL", CALLBACK_URL),
        ("TRELLO_BOARD_ID", "board42"),
        ("TRELLO_KEY", "trello-key"),
        ("TRELLO_TOKEN", "trello-token"),
        ("HIPCHAT_TOKEN", "hipchat-token"),
        ("HIPCHAT_ROOM", "engineering"),
        ("HIPCHAT_SENDER", "Trello"),
        ("LIST_TODO", "To Do"),
        ("LIST_PROGRESS", "Doing"),
        ("LIST_REVIEW", "Review"),
        ("LIST_DONE", "Done"),
        ("LIST_BUGTRACKER", "Bugs"),
    ]);
    Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).expect("test config is valid")
}

/// Signature as Trello sends it (mixed-case base64)
pub fn sign(body: &[u8]) -> String {
    let mut mac = Hmac::<Sha1>::new_from_slice(SECRET.as_bytes()).unwrap();
    mac.update(body);
    mac.update(CALLBACK_URL.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

pub fn create_card_payload(actor: &str, card: &str, list: &str) -> Value {
    json!({
        "action": {
            "id": "5a1",
            "type": "createCard",
            "memberCreator": {"id": "m1", "fullName": actor, "username": "someone"},
            "data": {
                "board": {"id": "board42", "name": "Project"},
                "card": {"id": "c1", "name": card},
                "list": {"id": "l-new", "name": list}
            }
        },
        "model": {"id": "board42"}
    })
}

pub fn update_card_payload(actor: &str, card: &str, before: &str, after: &str) -> Value {
    json!({
        "action": {
            "id": "5a2",
            "type": "updateCard",
            "memberCreator": {"id": "m1", "fullName": actor},
            "data": {
                "card": {"id": "c1", "name": card},
                "listBefore": {"id": "l-before", "name": before},
                "listAfter": {"id": "l-after", "name": after}
            }
        },
        "model": {"id": "board42"}
    })
}
