//! Chat input draft and send-button availability.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::QuickReply;

/// Chat input draft plus the in-flight flag mirrored from the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
    /// True exactly while a send round-trip is outstanding.
    pub busy: bool,
}

impl ComposerState {
    pub fn send_enabled(&self) -> bool {
        send_enabled(&self.draft, self.busy)
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Insert the quick reply's message verbatim. Does not send.
    pub fn apply_quick_reply(&mut self, reply: &QuickReply) {
        self.draft = reply.message.to_owned();
    }

    /// Take the trimmed draft for sending, clearing the input. Leaves a
    /// blank draft untouched and returns `None`.
    pub fn take_message(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_owned();
        self.draft.clear();
        Some(message)
    }
}

/// Send is allowed for non-blank drafts while no exchange is in flight.
pub fn send_enabled(draft: &str, busy: bool) -> bool {
    !draft.trim().is_empty() && !busy
}

/// Enter submits; Shift+Enter is a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Auto-resize height for the composer textarea.
pub fn composer_height(scroll_height: i32, max_height: i32) -> i32 {
    scroll_height.clamp(0, max_height)
}
