//! Wire types for the chat endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

pub const MALFORMED_REPLY_TEXT: &str = "Sorry, something went wrong. Please try again.";
pub const CONNECTION_FAILURE_TEXT: &str =
    "I'm sorry, I'm having trouble connecting right now. Please check your internet connection and try again.";

/// Successful reply body: `{ "response": "<html>" }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Why a chat exchange produced no usable reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// Network unreachable or request rejected before a body arrived.
    #[error("chat transport failed: {0}")]
    Transport(String),
    /// Body was not JSON, or lacked a non-empty `response` string.
    #[error("chat reply malformed: {0}")]
    MalformedResponse(String),
}

impl ChatError {
    /// Apology shown in place of the assistant reply.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            Self::Transport(_) => CONNECTION_FAILURE_TEXT,
            Self::MalformedResponse(_) => MALFORMED_REPLY_TEXT,
        }
    }
}
