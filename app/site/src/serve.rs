//! Server entrypoint shared by the CLI and the tests.

use crate::{AppState, router, session};
use anyhow::{Context, Result, bail};
use client::ApiClient;
use dcore::SiteConfig;
use std::net::{IpAddr, SocketAddr};
use tokio::{sync::broadcast, task::JoinHandle};

/// Handle returned by [`serve`]: the bound address and a shutdown trigger.
pub struct ServeHandle {
    /// The address the site is listening on.
    pub addr: SocketAddr,
    /// Stops both the server and the session sweeper.
    shutdown_tx: broadcast::Sender<()>,
    join: Option<JoinHandle<Result<(), std::io::Error>>>,
    sweeper: Option<JoinHandle<()>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.await?;
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Bind the site on `bind` and start serving in a spawned task.
///
/// Form posts are relayed to `api.base_url`, which must name a different
/// server. Idle chat sessions are ended after `server.session_ttl_secs`.
/// Call [`ServeHandle::shutdown`] to stop it.
pub async fn serve(config: &SiteConfig, bind: &str) -> Result<ServeHandle> {
    let api = ApiClient::with_timeout(&config.api.base_url, config.api.timeout())?;

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr()?;
    if is_self(&config.api.base_url, addr) {
        bail!(
            "api.base_url {} points at this site; set it to the form backend",
            config.api.base_url
        );
    }
    tracing::info!(api = %config.api.base_url, "site listening on {addr}");

    let state = AppState::new(config.chat.to_chat_config(), api);
    let sessions = state.sessions.clone();
    let app = router(state);

    let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);
    let sweeper = session::spawn_sweeper(
        sessions,
        config.server.session_ttl(),
        shutdown_tx.subscribe(),
    );
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        addr,
        shutdown_tx,
        join: Some(join),
        sweeper: Some(sweeper),
    })
}

/// Whether `base_url` names the address the site is bound to. Relaying a
/// form there would post back into the relay.
fn is_self(base_url: &str, addr: SocketAddr) -> bool {
    let Ok(url) = reqwest::Url::parse(base_url) else {
        return false;
    };
    if url.port_or_known_default() != Some(addr.port()) {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let local = addr.ip().is_loopback() || addr.ip().is_unspecified();
    if host.eq_ignore_ascii_case("localhost") {
        return local;
    }
    match host.trim_matches(['[', ']']).parse::<IpAddr>() {
        Ok(ip) => ip == addr.ip() || (ip.is_loopback() && local),
        Err(_) => false,
    }
}
