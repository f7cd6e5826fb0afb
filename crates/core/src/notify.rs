//! Toast notifications and the context object passed to form handlers.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, sync::Arc};
use tokio::sync::broadcast;

/// Number of toasts kept visible at once.
pub const TOAST_LIMIT: usize = 1;

/// Visual style of a toast.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    /// Failure styling.
    Destructive,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Toast {
    /// A "Success!" toast.
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success!".into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    /// A destructive "Error" toast.
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }
}

/// Collects toasts raised by form handlers.
///
/// Only the newest [`TOAST_LIMIT`] toasts stay visible; live listeners
/// receive every toast through [`Notifier::subscribe`].
#[derive(Debug)]
pub struct Notifier {
    visible: Mutex<VecDeque<Toast>>,
    limit: usize,
    tx: broadcast::Sender<Toast>,
}

impl Notifier {
    /// Create a notifier with the default visible limit.
    pub fn new() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }

    /// Create a notifier keeping at most `limit` toasts visible.
    pub fn with_limit(limit: usize) -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            visible: Mutex::new(VecDeque::new()),
            limit: limit.max(1),
            tx,
        }
    }

    /// Show a toast, dismissing the oldest ones beyond the limit.
    pub fn push(&self, toast: Toast) {
        match toast.variant {
            Variant::Default => tracing::info!("{}: {}", toast.title, toast.description),
            Variant::Destructive => tracing::warn!("{}: {}", toast.title, toast.description),
        }

        let mut visible = self.visible.lock();
        visible.push_back(toast.clone());
        while visible.len() > self.limit {
            visible.pop_front();
        }
        drop(visible);

        // No listeners is fine; the toast stays visible regardless.
        let _ = self.tx.send(toast);
    }

    /// The newest visible toast.
    pub fn latest(&self) -> Option<Toast> {
        self.visible.lock().back().cloned()
    }

    /// Dismiss and return every visible toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.visible.lock().drain(..).collect()
    }

    /// Receive toasts pushed from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.tx.subscribe()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicitly constructed context handed to everything that submits forms.
pub struct SiteContext<S> {
    /// Toast sink.
    pub notifier: Arc<Notifier>,
    /// Remote endpoint for the forms.
    pub submitter: S,
}

impl<S> SiteContext<S> {
    /// Create a context with a fresh notifier.
    pub fn new(submitter: S) -> Self {
        Self {
            notifier: Arc::new(Notifier::new()),
            submitter,
        }
    }
}
