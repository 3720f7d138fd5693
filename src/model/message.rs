//! Chat message domain values and wire DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of chat message, as stored in the `message_type` column.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Location,
}

/// Wire payload for posting a new chat message.
#[derive(Serialize, Debug, Clone)]
pub struct NewMessage {
    pub service_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub message_type: MessageKind,
}

/// One message row as returned by the message-history endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub service_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub message_type: MessageKind,
    pub created_at: DateTime<Utc>,
}
