//! Chat session store.
//!
//! Each session exclusively owns one [`Widget`]; sessions never share
//! history. Removing a session drops its widget once the last in-flight
//! request releases it, which also drops any reply still waiting on its
//! typing delay. Sessions nobody has looked at for a while are swept by
//! [`spawn_sweeper`].

use dcore::{ChatConfig, Widget};
use parking_lot::Mutex;
use std::{collections::BTreeMap, sync::Arc, time::Duration};
use tokio::{
    sync::broadcast,
    task::JoinHandle,
    time::{self, Instant},
};
use ulid::Ulid;

/// A live session.
pub type SessionHandle = Arc<Mutex<Widget>>;

/// Upper bound on the time between two sweeps.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entry {
    widget: SessionHandle,
    last_active: Instant,
}

/// Live chat sessions keyed by ULID.
pub struct SessionStore {
    sessions: Mutex<BTreeMap<Ulid, Entry>>,
    config: ChatConfig,
}

impl SessionStore {
    /// Create an empty store; new sessions start from `config`.
    pub fn new(config: ChatConfig) -> Self {
        Self {
            sessions: Mutex::new(BTreeMap::new()),
            config,
        }
    }

    /// Start a session seeded with the greeting.
    pub fn create(&self) -> (Ulid, SessionHandle) {
        let id = Ulid::new();
        let widget = Arc::new(Mutex::new(Widget::new(self.config.clone())));
        let entry = Entry {
            widget: widget.clone(),
            last_active: Instant::now(),
        };
        self.sessions.lock().insert(id, entry);
        tracing::info!(%id, "chat session started");
        (id, widget)
    }

    /// Look a session up and mark it active.
    pub fn get(&self, id: &Ulid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.lock();
        let entry = sessions.get_mut(id)?;
        entry.last_active = Instant::now();
        Some(entry.widget.clone())
    }

    /// End a session. Returns false if it did not exist.
    pub fn remove(&self, id: &Ulid) -> bool {
        let removed = self.sessions.lock().remove(id).is_some();
        if removed {
            tracing::info!(%id, "chat session ended");
        }
        removed
    }

    /// End every session idle for at least `max_idle`. Returns how many
    /// were removed.
    pub fn cleanup_expired(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_active) < max_idle);
        before - sessions.len()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    /// Whether there are no live sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

/// Periodically end sessions idle for `max_idle`.
///
/// The sweeper stops when `shutdown` fires or the handle is aborted.
pub fn spawn_sweeper(
    sessions: Arc<SessionStore>,
    max_idle: Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    let period = max_idle.clamp(Duration::from_millis(1), SWEEP_INTERVAL);
    tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = sessions.cleanup_expired(max_idle);
                    if removed > 0 {
                        tracing::info!(removed, live = sessions.len(), "expired idle chat sessions");
                    }
                }
                _ = shutdown.recv() => {
                    tracing::debug!("session sweeper stopped");
                    return;
                }
            }
        }
    })
}
