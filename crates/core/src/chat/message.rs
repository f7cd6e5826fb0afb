//! Chat message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message in the chat log
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    /// The text body of the message
    pub content: String,

    /// Who wrote the message
    pub sender: Sender,

    /// When the message was appended to the log
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Whether the visitor wrote this message
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// The author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The site visitor
    User,
    /// The support bot
    Agent,
}
