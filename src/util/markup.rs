//! Transcript entry rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns a `ChatMessage` into the header fields and bubble HTML the chat
//! panel injects. User text is untrusted and always escaped. Assistant text
//! comes from the server already formatted as HTML (`<b>`, `<br>`) and is
//! passed through untouched.
//!
//! TRADE-OFFS
//! ==========
//! Passing assistant HTML through means a compromised or misbehaving server
//! can inject markup into the transcript. This mirrors the deployed server
//! contract and is tracked as an open question rather than silently changed.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use crate::state::chat::{Author, ChatMessage};

pub const USER_DISPLAY_NAME: &str = "You";
pub const ASSISTANT_DISPLAY_NAME: &str = "MindMate";

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// Display-ready view of one transcript message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    pub css_class: &'static str,
    pub avatar: &'static str,
    pub avatar_class: &'static str,
    pub display_name: &'static str,
    pub time_label: String,
    pub body_html: String,
}

pub fn render_message(message: &ChatMessage) -> RenderedMessage {
    match message.author {
        Author::User => RenderedMessage {
            css_class: "message user-message",
            avatar: "\u{1F464}",
            avatar_class: "avatar user-avatar",
            display_name: USER_DISPLAY_NAME,
            time_label: message.sent_at.label(),
            body_html: escape_html(&message.text),
        },
        Author::Assistant => RenderedMessage {
            css_class: "message bot-message",
            avatar: "\u{1F916}",
            avatar_class: "avatar bot-avatar",
            display_name: ASSISTANT_DISPLAY_NAME,
            time_label: message.sent_at.label(),
            body_html: message.text.clone(),
        },
    }
}

/// Header fields for the "assistant is responding" placeholder.
pub fn render_pending() -> RenderedMessage {
    RenderedMessage {
        css_class: "message bot-message",
        avatar: "\u{1F916}",
        avatar_class: "avatar bot-avatar",
        display_name: ASSISTANT_DISPLAY_NAME,
        time_label: "typing...".to_owned(),
        body_html: "Thinking".to_owned(),
    }
}
