use serde::{Deserialize, Serialize};

/// Form body for `POST /v1/rooms/message`.
#[derive(Debug, Clone, Serialize)]
pub struct RoomMessage<'a> {
    pub room_id: &'a str,
    pub from: &'a str,
    pub message: &'a str,
    pub message_format: &'a str,
    /// HipChat v1 expects `0`/`1` rather than a JSON boolean.
    pub notify: u8,
}

/// `{"status": "sent"}` on success.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub status: String,
}
