//! CLI argument parsing and subcommand dispatch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dcore::{SiteConfig, config::default_config_path};
use std::path::PathBuf;

pub mod chat;
pub mod form;
pub mod route;
pub mod serve;

/// DesignDynasty site tools.
#[derive(Parser, Debug)]
#[command(name = "dynasty", about = "DesignDynasty site tools")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Config file. Defaults to `~/.config/dynasty/site.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the site pages and chat sessions.
    Serve(serve::Serve),
    /// Chat with the support widget in the terminal.
    Chat(chat::Chat),
    /// Send the contact section form.
    Contact(form::Contact),
    /// Send the contact page project inquiry.
    Inquiry(form::Inquiry),
    /// Subscribe an email to the newsletter.
    Subscribe(form::Subscribe),
    /// Show which page a path resolves to.
    Route(route::Route),
}

impl Cli {
    /// Load configuration and run the selected subcommand.
    pub async fn run(self) -> Result<()> {
        let config = self.load_config()?;
        match self.command {
            Command::Serve(cmd) => cmd.run(&config).await,
            Command::Chat(cmd) => cmd.run(&config).await,
            Command::Contact(cmd) => cmd.run(&config).await,
            Command::Inquiry(cmd) => cmd.run(&config).await,
            Command::Subscribe(cmd) => cmd.run(&config).await,
            Command::Route(cmd) => {
                cmd.run();
                Ok(())
            }
        }
    }

    /// The `--config` file if given, else the default path, else defaults.
    pub fn load_config(&self) -> Result<SiteConfig> {
        let Some(path) = self.config.clone().or_else(default_config_path) else {
            return Ok(SiteConfig::default());
        };
        SiteConfig::load_or_default(&path).with_context(|| format!("loading {}", path.display()))
    }
}
