//! Chat page: header with theme toggle and logout, plus the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::theme_toggle::ThemeToggle;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <header class="chat-header">
                <h1>"MindMate"</h1>
                <p class="chat-header__subtitle">"Your AI wellness companion"</p>
                <div class="chat-header__actions">
                    <ThemeToggle/>
                    <a href="/logout" rel="external" class="logout-link">"Logout"</a>
                </div>
            </header>
            <ChatPanel/>
        </div>
    }
}
