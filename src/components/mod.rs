//! Reusable UI components.

pub mod chat_panel;
pub mod theme_toggle;
