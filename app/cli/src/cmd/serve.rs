//! Site server command.

use anyhow::Result;
use clap::Args;
use dcore::SiteConfig;

/// Serve the site pages and chat sessions.
#[derive(Args, Debug)]
pub struct Serve {
    /// Bind address (host:port). Defaults to `server.bind` from the config.
    #[arg(long)]
    pub bind: Option<std::net::SocketAddr>,
}

impl Serve {
    /// Start the server and run until ctrl-c.
    pub async fn run(self, config: &SiteConfig) -> Result<()> {
        let bind = self
            .bind
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| config.server.bind.clone());

        let handle = site::serve(config, &bind).await?;
        println!("serving on http://{}", handle.addr);

        tokio::signal::ctrl_c().await?;
        tracing::info!("received ctrl-c, shutting down");
        handle.shutdown().await?;
        tracing::info!("site shut down");
        Ok(())
    }
}
