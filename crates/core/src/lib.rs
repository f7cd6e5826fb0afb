//! Core of the DesignDynasty site: the chat widget and its keyword
//! responder, the routing table, form submission flow and the toast
//! notification context.

pub use {
    chat::{ChatConfig, ChatMessage, MessageLog, QuickOption, ResponseRule, RuleTable, Sender},
    chat::{Visibility, Widget},
    config::SiteConfig,
    error::{Error, Result},
    form::{ContactForm, NewsletterForm, Outcome, ProjectInquiry, Submitter},
    notify::{Notifier, SiteContext, Toast, Variant},
    route::{NavItem, Page, Service},
};

pub mod chat;
pub mod config;
mod error;
pub mod form;
pub mod notify;
pub mod route;
pub mod utils;
