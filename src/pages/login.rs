//! Sign-up / sign-in page with inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form posts natively to the configured login action; the server
//! decides sign-in vs. account creation and redirects. This page only gates
//! the submit and leaves the loading state up until navigation replaces it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ClientConfig;
use crate::state::auth_form::{AuthForm, FieldStatus, SubmitDecision};

/// Third-party sign-in handled entirely by the server's OAuth flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub fn oauth_path(self) -> &'static str {
        match self {
            Self::Google => "/auth/google",
            Self::Apple => "/auth/apple",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Continue with Google",
            Self::Apple => "Continue with Apple",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Google => "social-btn google-btn",
            Self::Apple => "social-btn apple-btn",
        }
    }
}

/// Input class combining the base class with validation styling.
pub fn field_class(base: &str, status: &FieldStatus) -> String {
    match status.css_class() {
        "" => base.to_owned(),
        state => format!("{base} {state}"),
    }
}

fn start_oauth(provider: SocialProvider) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(provider.oauth_path());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = provider;
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let form = expect_context::<RwSignal<AuthForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let mut decision = SubmitDecision::Blocked;
        form.update(|f| decision = f.submit());
        if decision == SubmitDecision::Blocked {
            ev.prevent_default();
        }
    };

    let copy = move || form.with(|f| f.mode.copy());

    let social_button = move |provider: SocialProvider| {
        view! {
            <button
                type="button"
                class=provider.css_class()
                on:click=move |_| start_oauth(provider)
            >
                {provider.label()}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__top">
                    <ThemeToggle/>
                </div>
                <h1 id="formTitle">{move || copy().title}</h1>
                <p id="formSubtitle" class="login-card__subtitle">{move || copy().subtitle}</p>

                <form
                    id="loginForm"
                    class="login-form"
                    method="post"
                    action=config.login_action.clone()
                    on:submit=on_submit
                >
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            id="name"
                            name="name"
                            type="text"
                            autocomplete="username"
                            class=move || form.with(|f| field_class("form-input", &f.identifier_status))
                            prop:value=move || form.with(|f| f.identifier.clone())
                            on:input=move |ev| form.update(|f| f.input_identifier(event_target_value(&ev)))
                            on:blur=move |_| {
                                form.update(|f| {
                                    f.blur_identifier();
                                });
                            }
                        />
                        <span id="nameError" class="error-message">
                            {move || form.with(|f| f.identifier_status.message())}
                        </span>
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-wrapper">
                            <input
                                id="password"
                                name="password"
                                autocomplete="current-password"
                                type=move || if form.with(|f| f.secret_visible) { "text" } else { "password" }
                                class=move || form.with(|f| field_class("form-input", &f.secret_status))
                                prop:value=move || form.with(|f| f.secret.clone())
                                on:input=move |ev| form.update(|f| f.input_secret(event_target_value(&ev)))
                                on:blur=move |_| {
                                    form.update(|f| {
                                        f.blur_secret();
                                    });
                                }
                            />
                            <button
                                id="passwordToggle"
                                type="button"
                                class="password-toggle"
                                on:click=move |_| form.update(AuthForm::toggle_secret_visibility)
                            >
                                <i class=move || {
                                    if form.with(|f| f.secret_visible) { "fas fa-eye-slash" } else { "fas fa-eye" }
                                }></i>
                            </button>
                        </div>
                        <span id="passwordStrength" class=move || {
                            form.with(|f| {
                                f.strength.map_or("password-strength".to_owned(), |s| {
                                    format!("password-strength {}", s.css_class())
                                })
                            })
                        }>
                            {move || form.with(|f| f.strength.map_or("", |s| s.label()))}
                        </span>
                        <span id="passwordError" class="error-message">
                            {move || form.with(|f| f.secret_status.message())}
                        </span>
                    </div>

                    <div class="form-group form-group--checkbox">
                        <label>
                            <input
                                id="agreeTerms"
                                name="agree_terms"
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.consent)
                                on:change=move |ev| form.update(|f| f.set_consent(event_target_checked(&ev)))
                            />
                            " I agree to the Terms of Service and Privacy Policy"
                        </label>
                        <span class="error-message">
                            {move || form.with(|f| f.consent_error.unwrap_or_default())}
                        </span>
                    </div>

                    <button
                        id="loginBtn"
                        type="submit"
                        class="login-button"
                        class:loading=move || form.with(|f| f.loading)
                        disabled=move || !form.with(AuthForm::submit_enabled)
                    >
                        <span class="btn-text">{move || copy().submit_label}</span>
                        <Show when=move || form.with(|f| f.loading)>
                            <span id="btnLoader" class="btn-loader"></span>
                        </Show>
                    </button>
                </form>

                <div class="login-divider"><span>"or"</span></div>
                <div class="social-login">
                    {social_button(SocialProvider::Google)}
                    {social_button(SocialProvider::Apple)}
                </div>

                <p class="mode-toggle">
                    {move || copy().toggle_prompt}
                    " "
                    <a
                        id="toggleMode"
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            form.update(AuthForm::toggle_mode);
                        }
                    >
                        {move || copy().toggle_action}
                    </a>
                </p>
            </div>
        </div>
    }
}
