//! The support chat widget.
//!
//! A session is one [`Widget`]: it owns a [`MessageLog`] seeded with a
//! greeting, answers user input through the keyword [`RuleTable`], and
//! appends each reply after a fixed typing delay.

pub use {
    log::MessageLog,
    message::{ChatMessage, Sender},
    rules::{DEFAULT_REPLY, ResponseRule, RuleTable, default_rules},
    widget::{
        ChatConfig, DEFAULT_REPLY_DELAY, QuickOption, Visibility, Widget, default_quick_options,
    },
};

mod log;
mod message;
mod rules;
mod widget;

/// Widget header title.
pub const TITLE: &str = "DesignDynasty Support";

/// Widget header status line.
pub const STATUS: &str = "Online now";

/// Agent greeting seeded into every new session.
pub const GREETING: &str = "Hi! How can I help you today?";
