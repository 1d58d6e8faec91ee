//! Chat session state machine.
//!
//! `Idle -> Sending` on a non-blank submit: the user's message and a
//! typing placeholder are appended and the composer goes busy.
//! `Sending -> Idle` when the round trip resolves: the placeholder is
//! replaced by the reply, or by an apology with `last_error` set. Only one
//! exchange is ever in flight.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::composer::ComposerState;
use crate::net::types::{ChatError, ChatReply};

/// Who wrote a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// Local wall-clock moment a message was added.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SentAt {
    pub epoch_ms: f64,
    pub hour: u32,
    pub minute: u32,
}

impl SentAt {
    /// Current local time. Zeroed outside a browser.
    pub fn now() -> Self {
        #[cfg(feature = "csr")]
        {
            let date = js_sys::Date::new_0();
            Self { epoch_ms: date.get_time(), hour: date.get_hours(), minute: date.get_minutes() }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Two-digit `HH:MM` clock label.
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// A single rendered chat message. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub sent_at: SentAt,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    /// "Assistant is responding" placeholder for the in-flight exchange.
    Pending { id: u64 },
}

impl TranscriptEntry {
    pub fn id(&self) -> u64 {
        match self {
            Self::Message(m) => m.id,
            Self::Pending { id } => *id,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Sending,
}

/// Chat session: append-only transcript plus the single-exchange guard.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub transcript: Vec<TranscriptEntry>,
    pub phase: SessionPhase,
    /// Failure behind the most recent fallback reply, cleared on next send.
    pub last_error: Option<ChatError>,
    next_id: u64,
}

impl ChatState {
    pub fn is_sending(&self) -> bool {
        self.phase == SessionPhase::Sending
    }

    /// Idle after a failed exchange.
    pub fn is_idle_with_error(&self) -> bool {
        self.phase == SessionPhase::Idle && self.last_error.is_some()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript.iter().filter_map(|entry| match entry {
            TranscriptEntry::Message(m) => Some(m),
            TranscriptEntry::Pending { .. } => None,
        })
    }

    pub fn has_pending(&self) -> bool {
        self.transcript.iter().any(|e| matches!(e, TranscriptEntry::Pending { .. }))
    }

    /// Idle -> Sending. Appends the user's message and a placeholder, clears
    /// the draft, and marks the composer busy. Returns the text to send, or
    /// `None` (no state change) when already sending or the draft is blank.
    pub fn begin_send(&mut self, composer: &mut ComposerState, now: SentAt) -> Option<String> {
        if self.is_sending() || composer.busy {
            return None;
        }
        let text = composer.take_message()?;

        self.push_message(Author::User, text.clone(), now);
        let id = self.alloc_id();
        self.transcript.push(TranscriptEntry::Pending { id });
        self.phase = SessionPhase::Sending;
        self.last_error = None;
        composer.busy = true;
        Some(text)
    }

    /// Sending -> Idle. Replaces the placeholder with the reply, or with the
    /// fallback apology when the exchange failed. Ignored unless sending.
    pub fn finish_send(
        &mut self,
        composer: &mut ComposerState,
        outcome: Result<ChatReply, ChatError>,
        now: SentAt,
    ) {
        if !self.is_sending() {
            return;
        }
        self.transcript.retain(|e| !matches!(e, TranscriptEntry::Pending { .. }));

        let text = match outcome {
            Ok(reply) => reply.response,
            Err(err) => {
                leptos::logging::warn!("chat exchange failed: {err}");
                let text = err.fallback_text().to_owned();
                self.last_error = Some(err);
                text
            }
        };
        self.push_message(Author::Assistant, text, now);
        self.phase = SessionPhase::Idle;
        composer.busy = false;
    }

    fn push_message(&mut self, author: Author, text: String, sent_at: SentAt) {
        let id = self.alloc_id();
        self.transcript.push(TranscriptEntry::Message(ChatMessage { id, author, text, sent_at }));
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
