//! Append-only message history of one chat session.

use crate::chat::{ChatMessage, Sender};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

/// Ordered, append-only history of a chat session.
///
/// Cloning yields another handle to the same history. Observers subscribe
/// to a length counter that changes after every append.
#[derive(Debug, Clone)]
pub struct MessageLog {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    messages: Mutex<Vec<ChatMessage>>,
    changed: watch::Sender<usize>,
}

impl MessageLog {
    /// Create an empty log.
    pub fn new() -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                messages: Mutex::new(Vec::new()),
                changed,
            }),
        }
    }

    /// Create a log holding a single agent greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        let log = Self::new();
        log.append(greeting, Sender::Agent);
        log
    }

    /// Append a message stamped with the current time and return it.
    ///
    /// Timestamps never go backwards within a log, even if the wall clock
    /// does.
    pub fn append(&self, content: impl Into<String>, sender: Sender) -> ChatMessage {
        let mut messages = self.shared.messages.lock();
        let mut timestamp = Utc::now();
        if let Some(last) = messages.last() {
            timestamp = timestamp.max(last.timestamp);
        }

        let message = ChatMessage {
            content: content.into(),
            sender,
            timestamp,
        };
        messages.push(message.clone());
        let len = messages.len();
        drop(messages);

        tracing::debug!(len, ?sender, "appended chat message");
        self.shared.changed.send_replace(len);
        message
    }

    /// Snapshot of every message in insertion order.
    pub fn all(&self) -> Vec<ChatMessage> {
        self.shared.messages.lock().clone()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<ChatMessage> {
        self.shared.messages.lock().last().cloned()
    }

    /// Number of messages in the log.
    pub fn len(&self) -> usize {
        self.shared.messages.lock().len()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Watch the log length; the receiver is marked changed on every append.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.shared.changed.subscribe()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
