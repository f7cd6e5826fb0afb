//! Terminal chat with the support widget.

use anyhow::Result;
use clap::Args;
use dcore::{ChatMessage, SiteConfig, Widget, chat};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Chat with the support widget in the terminal.
///
/// Type a message and press enter. `/quick <label>` picks a quick option
/// while they are still offered. Ctrl-D ends the session.
#[derive(Args, Debug)]
pub struct Chat;

/// What one line of terminal input did.
#[derive(Debug)]
pub enum Input {
    /// Blank line; nothing was sent.
    Ignored,
    /// Typed text was sent as-is.
    Sent(ChatMessage),
    /// A quick option was picked and its message sent.
    Quick(ChatMessage),
    /// `/quick` named an option that is unknown or no longer offered.
    UnknownQuick(String),
}

/// Apply one line of input to the widget.
pub fn handle_line(widget: &mut Widget, line: &str) -> Input {
    let trimmed = line.trim();
    let (command, arg) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    if command == "/quick" {
        let label = arg.trim();
        return match widget.select_quick_option(label) {
            Some(message) => Input::Quick(message),
            None => Input::UnknownQuick(label.to_owned()),
        };
    }

    match widget.submit(line) {
        Some(message) => Input::Sent(message),
        None => Input::Ignored,
    }
}

impl Chat {
    pub async fn run(self, config: &SiteConfig) -> Result<()> {
        let mut widget = Widget::new(config.chat.to_chat_config());
        widget.open();

        println!("{} ({})", chat::TITLE, chat::STATUS);
        let log = widget.log().clone();
        let mut changed = log.subscribe();
        let mut shown = 0;
        for message in log.all() {
            print_message(&message);
            shown += 1;
        }
        print_quick_options(&widget);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match handle_line(&mut widget, &line) {
                        Input::Ignored => {}
                        // The terminal already echoed what the user typed.
                        Input::Sent(_) => shown += 1,
                        Input::Quick(message) => {
                            print_message(&message);
                            shown += 1;
                        }
                        Input::UnknownQuick(label) => {
                            println!("no quick option named {label:?}");
                            print_quick_options(&widget);
                        }
                    }
                }
                Ok(()) = changed.changed() => {
                    let messages = log.all();
                    for message in messages.iter().skip(shown) {
                        print_message(message);
                    }
                    shown = messages.len();
                }
            }
        }

        let pending = widget.pending();
        if pending > 0 {
            tracing::debug!(pending, "dropping unanswered messages");
        }
        Ok(())
    }
}

fn print_message(message: &ChatMessage) {
    let who = if message.is_user() { "you" } else { "support" };
    println!(
        "[{}] {who}: {}",
        message.timestamp.format("%H:%M"),
        message.content
    );
}

fn print_quick_options(widget: &Widget) {
    let labels: Vec<_> = widget
        .quick_options()
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    if !labels.is_empty() {
        println!("quick options: {}", labels.join(", "));
    }
}
