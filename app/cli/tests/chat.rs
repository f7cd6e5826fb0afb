//! Tests for terminal chat line handling.

use dcore::{ChatConfig, Sender, Widget};
use dynasty_cli::cmd::chat::{Input, handle_line};

#[tokio::test(start_paused = true)]
async fn blank_line_is_ignored() {
    let mut widget = Widget::new(ChatConfig::default());
    assert!(matches!(handle_line(&mut widget, "   "), Input::Ignored));
    assert_eq!(widget.messages().len(), 1);
    assert_eq!(widget.quick_options().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn plain_text_is_sent_and_answered() {
    let mut widget = Widget::new(ChatConfig::default());
    match handle_line(&mut widget, "What about pricing?") {
        Input::Sent(message) => assert_eq!(message.content, "What about pricing?"),
        other => panic!("expected Sent, got {other:?}"),
    }

    widget.settle().await;
    let messages = widget.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].sender, Sender::Agent);
    assert!(messages[2].content.starts_with("We offer flexible pricing plans"));
}

#[tokio::test(start_paused = true)]
async fn quick_command_sends_option_message() {
    let mut widget = Widget::new(ChatConfig::default());
    match handle_line(&mut widget, "/quick portfolio") {
        Input::Quick(message) => {
            assert_eq!(message.content, "I want to view your portfolio");
            assert_eq!(message.sender, Sender::User);
        }
        other => panic!("expected Quick, got {other:?}"),
    }

    widget.settle().await;
    assert!(
        widget.messages()[2]
            .content
            .starts_with("You can view our latest projects")
    );
}

#[tokio::test(start_paused = true)]
async fn quick_command_after_interaction_is_unknown() {
    let mut widget = Widget::new(ChatConfig::default());
    handle_line(&mut widget, "hello");

    match handle_line(&mut widget, "/quick Pricing") {
        Input::UnknownQuick(label) => assert_eq!(label, "Pricing"),
        other => panic!("expected UnknownQuick, got {other:?}"),
    }
    assert_eq!(widget.messages().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn word_starting_with_quick_is_plain_text() {
    let mut widget = Widget::new(ChatConfig::default());
    match handle_line(&mut widget, "/quickly please") {
        Input::Sent(message) => assert_eq!(message.content, "/quickly please"),
        other => panic!("expected Sent, got {other:?}"),
    }
}
