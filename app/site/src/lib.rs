//! DesignDynasty site server: renders the routing table, relays the contact
//! and newsletter forms to the form backend, and hosts chat widget sessions
//! over JSON.

pub use {
    serve::{ServeHandle, serve},
    session::SessionStore,
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};

pub mod api;
pub mod chat;
pub mod page;
mod serve;
pub mod session;
pub mod state;

/// Build the axum router.
///
/// Every path not claimed by the form relay or the chat API goes
/// through the page table, which answers 404 with the not-found page for
/// unknown paths.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(api::contact))
        .route("/api/newsletter", post(api::newsletter))
        .route("/chat/sessions", post(chat::create))
        .route("/chat/sessions/{id}", get(chat::show).delete(chat::end))
        .route("/chat/sessions/{id}/messages", post(chat::send))
        .route("/chat/sessions/{id}/quick", post(chat::quick))
        .route("/chat/sessions/{id}/toggle", post(chat::toggle))
        .fallback(page::page)
        .with_state(state)
}
