//! Shared application state for the site server.

use crate::session::SessionStore;
use client::ApiClient;
use dcore::ChatConfig;
use std::sync::Arc;

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live chat sessions.
    pub sessions: Arc<SessionStore>,
    /// Client for the form backend the site relays to.
    pub api: ApiClient,
}

impl AppState {
    /// Create state whose sessions start from `chat` and whose forms are
    /// relayed through `api`.
    pub fn new(chat: ChatConfig, api: ApiClient) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(chat)),
            api,
        }
    }
}
