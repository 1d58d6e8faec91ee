//! Client configuration shared by every page.
//!
//! Built once in `App` and provided through Leptos context so components
//! never reach for hard-coded endpoints or storage keys.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_LOGIN_ACTION: &str = "/login";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;
pub const DEFAULT_COMPOSER_MAX_HEIGHT_PX: i32 = 120;

/// Shortcut prompts shown under the composer.
pub const DEFAULT_QUICK_REPLIES: &[QuickReply] = &[
    QuickReply { label: "Feeling anxious", message: "I'm feeling anxious today." },
    QuickReply { label: "Can't sleep", message: "I'm having trouble sleeping." },
    QuickReply { label: "Need motivation", message: "I need some motivation." },
    QuickReply { label: "Just venting", message: "I just need to vent for a bit." },
];

/// A quick-reply chip: visible label plus the draft text it inserts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickReply {
    pub label: &'static str,
    pub message: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub chat_endpoint: String,
    pub login_action: String,
    pub theme_storage_key: String,
    /// Delay before scrolling the transcript to the newest entry.
    pub scroll_delay_ms: u32,
    /// Composer textarea auto-resize cap.
    pub composer_max_height_px: i32,
    pub quick_replies: Vec<QuickReply>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            login_action: DEFAULT_LOGIN_ACTION.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            composer_max_height_px: DEFAULT_COMPOSER_MAX_HEIGHT_PX,
            quick_replies: DEFAULT_QUICK_REPLIES.to_vec(),
        }
    }
}
