//! Session controller for the chat widget.

use crate::chat::{ChatMessage, GREETING, MessageLog, RuleTable, Sender};
use serde::{Deserialize, Serialize};
use std::{sync::Arc, time::Duration};
use tokio::{task::JoinSet, time::Instant};

/// Typing delay between a submission and the agent reply.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// Whether the chat panel is shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the launcher button is visible.
    #[default]
    Closed,
    /// The chat panel is expanded.
    Open,
}

impl Visibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// A shortcut offered before the visitor has typed anything.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuickOption {
    /// Button label.
    pub label: String,
    /// Text submitted on the visitor's behalf.
    pub message: String,
}

impl QuickOption {
    /// Create a quick option.
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

/// The built-in quick options.
pub fn default_quick_options() -> Vec<QuickOption> {
    vec![
        QuickOption::new("Web Development", "I need web development services"),
        QuickOption::new("Pricing", "I want to see pricing"),
        QuickOption::new("Portfolio", "I want to view your portfolio"),
    ]
}

/// Everything needed to start a chat session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Agent greeting seeded into the log.
    pub greeting: String,
    /// Delay before each agent reply is appended.
    pub reply_delay: Duration,
    /// Keyword rules, shared between sessions.
    pub rules: Arc<RuleTable>,
    /// Shortcuts shown before the first interaction.
    pub quick_options: Vec<QuickOption>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: GREETING.to_owned(),
            reply_delay: DEFAULT_REPLY_DELAY,
            rules: Arc::new(RuleTable::default()),
            quick_options: default_quick_options(),
        }
    }
}

/// One chat session: visibility, message history and pending replies.
///
/// Replies are scheduled as tasks owned by the widget. Dropping the widget
/// aborts them, so no reply is ever appended to a session that has ended.
/// Submitting requires a running tokio runtime.
pub struct Widget {
    visibility: Visibility,
    log: MessageLog,
    rules: Arc<RuleTable>,
    reply_delay: Duration,
    quick_options: Vec<QuickOption>,
    interacted: bool,
    pending: JoinSet<()>,
}

impl Widget {
    /// Start a session with the greeting already in the log.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            visibility: Visibility::Closed,
            log: MessageLog::seeded(config.greeting),
            rules: config.rules,
            reply_delay: config.reply_delay,
            quick_options: config.quick_options,
            interacted: false,
            pending: JoinSet::new(),
        }
    }

    /// Current panel state.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether the panel is expanded.
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Flip the panel and return the new state.
    pub fn toggle(&mut self) -> Visibility {
        self.visibility = self.visibility.toggled();
        self.visibility
    }

    /// Expand the panel.
    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    /// Collapse the panel. History is kept.
    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    /// The session history.
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// Snapshot of the session history.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log.all()
    }

    /// Quick options still on offer; empty once the visitor has interacted.
    pub fn quick_options(&self) -> &[QuickOption] {
        if self.interacted {
            &[]
        } else {
            &self.quick_options
        }
    }

    /// Submit visitor input.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed text
    /// is logged as a user message and the matching reply is scheduled to
    /// land `reply_delay` after this call.
    pub fn submit(&mut self, text: &str) -> Option<ChatMessage> {
        let content = text.trim();
        if content.is_empty() {
            tracing::trace!("ignoring blank chat input");
            return None;
        }

        let due = Instant::now() + self.reply_delay;
        self.interacted = true;
        let message = self.log.append(content, Sender::User);
        let reply = self.rules.lookup(text).to_owned();
        self.schedule(reply, due);
        Some(message)
    }

    /// Submit the message behind a quick option, matched by label
    /// case-insensitively.
    ///
    /// Returns `None` when the label is unknown or the options are no
    /// longer offered.
    pub fn select_quick_option(&mut self, label: &str) -> Option<ChatMessage> {
        let label = label.trim();
        let message = self
            .quick_options()
            .iter()
            .find(|option| option.label.eq_ignore_ascii_case(label))?
            .message
            .clone();
        self.submit(&message)
    }

    /// Number of replies scheduled but not yet appended.
    pub fn pending(&mut self) -> usize {
        self.reap();
        self.pending.len()
    }

    /// Wait until every scheduled reply has been appended.
    pub async fn settle(&mut self) {
        while let Some(result) = self.pending.join_next().await {
            if let Err(e) = result {
                tracing::error!("chat reply task failed: {e}");
            }
        }
    }

    fn schedule(&mut self, reply: String, due: Instant) {
        self.reap();
        let log = self.log.clone();
        tracing::debug!(delay = ?self.reply_delay, "scheduling chat reply");
        self.pending.spawn(async move {
            tokio::time::sleep_until(due).await;
            log.append(reply, Sender::Agent);
        });
    }

    /// Drop finished reply tasks from the set.
    fn reap(&mut self) {
        while let Some(result) = self.pending.try_join_next() {
            if let Err(e) = result {
                tracing::error!("chat reply task failed: {e}");
            }
        }
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(
                pending = self.pending.len(),
                "chat session ended, dropping pending replies"
            );
        }
    }
}
