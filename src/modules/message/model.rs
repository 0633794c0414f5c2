use serde::{Deserialize, Serialize};

use crate::modules::user::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Text,
    System,
    Notification,
}

/// Delivery state as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub status: MessageStatus,
    pub sender_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub sender: MessageSender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    #[serde(rename = "type")]
    pub conversation_type: String,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Conversation {
    /// Messages from other participants that `user_id` has not read yet.
    pub fn unread_count(&self, user_id: &str) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender_id != user_id && m.status != MessageStatus::Read)
            .count()
    }
}

/// Number shown on the messages badge.
pub fn unread_total(conversations: &[Conversation], user_id: &str) -> usize {
    conversations.iter().map(|c| c.unread_count(user_id)).sum()
}
