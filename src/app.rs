//! Root application component with routing and context providers.
//!
//! Mounted client-side into the static page shell; no server-rendered
//! markup is assumed.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::{auth_form::AuthForm, chat::ChatState, composer::ComposerState};
use crate::util::storage::BrowserStorage;
use crate::util::theme::ThemeController;

/// Theme controller backed by `localStorage`.
pub type AppTheme = ThemeController<BrowserStorage>;

/// Root application component.
///
/// Binds every controller once and hands it to pages through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::default();
    let theme = RwSignal::new(AppTheme::init(BrowserStorage, &config.theme_storage_key));
    let chat = RwSignal::new(ChatState::default());
    let composer = RwSignal::new(ComposerState::default());
    let auth_form = RwSignal::new(AuthForm::default());

    provide_context(config);
    provide_context(theme);
    provide_context(chat);
    provide_context(composer);
    provide_context(auth_form);

    view! {
        <Stylesheet id="leptos" href="/pkg/mindmate.css"/>
        <Title text="MindMate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
