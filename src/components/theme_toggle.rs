//! Header button that flips between light and dark themes.

use leptos::prelude::*;

use crate::app::AppTheme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<AppTheme>>();

    view! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            on:click=move |_| {
                theme.update(|t| {
                    t.toggle();
                });
            }
        >
            <i id="theme-icon" class=move || theme.with(|t| t.theme().icon_class())></i>
        </button>
    }
}
