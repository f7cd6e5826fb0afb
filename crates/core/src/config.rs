//! Site configuration loaded from TOML.

use crate::{
    Error, Result,
    chat::{
        ChatConfig, DEFAULT_REPLY, DEFAULT_REPLY_DELAY, GREETING, QuickOption, ResponseRule,
        RuleTable, default_quick_options, default_rules,
    },
};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "dynasty";
/// Config file name.
pub const CONFIG_FILE: &str = "site.toml";

/// Resolve the default config file (`~/.config/dynasty/site.toml` on unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Top-level site configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Form endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Chat widget settings.
    #[serde(default)]
    pub chat: ChatSection,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the site listens on.
    pub bind: String,
    /// Chat sessions untouched for this many seconds are ended.
    pub session_ttl_secs: u64,
}

impl ServerConfig {
    /// Idle time after which a chat session is ended.
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_owned(),
            session_ttl_secs: 30 * 60,
        }
    }
}

/// Where the contact and newsletter forms are posted.
///
/// This is the form backend, a separate service from the site. The site
/// relays its rendered forms here, so it must not name the site's own bind
/// address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin serving `/api/contact` and `/api/newsletter` (supports
    /// `${ENV_VAR}` expansion).
    pub base_url: String,
    /// Seconds to wait for an endpoint before the submission fails.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Request timeout for form submissions.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_owned(),
            timeout_secs: 10,
        }
    }
}

/// Chat widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSection {
    /// Agent greeting seeded into each session.
    pub greeting: String,
    /// Typing delay before each reply, in milliseconds.
    pub reply_delay_ms: u64,
    /// Reply used when no keyword matches.
    pub default_reply: String,
    /// Keyword rules in priority order.
    pub rules: Vec<ResponseRule>,
    /// Shortcuts shown before the first interaction.
    pub quick_options: Vec<QuickOption>,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            greeting: GREETING.to_owned(),
            reply_delay_ms: DEFAULT_REPLY_DELAY.as_millis() as u64,
            default_reply: DEFAULT_REPLY.to_owned(),
            rules: default_rules(),
            quick_options: default_quick_options(),
        }
    }
}

impl ChatSection {
    /// Build the per-session chat configuration.
    pub fn to_chat_config(&self) -> ChatConfig {
        ChatConfig {
            greeting: self.greeting.clone(),
            reply_delay: Duration::from_millis(self.reply_delay_ms),
            rules: Arc::new(RuleTable::new(
                self.rules.iter().cloned(),
                self.default_reply.clone(),
            )),
            quick_options: self.quick_options.clone(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML string, expanding `${ENV_VAR}` references first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = crate::utils::expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::info!("loading configuration from {}", path.display());
            Self::load(path)
        } else {
            tracing::debug!("{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn check(&self) -> Result<()> {
        if self.chat.greeting.trim().is_empty() {
            return Err(Error::Config("chat.greeting must not be empty".into()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::Config("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be positive".into()));
        }
        if self.server.session_ttl_secs == 0 {
            return Err(Error::Config("server.session_ttl_secs must be positive".into()));
        }
        Ok(())
    }
}
