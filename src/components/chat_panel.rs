//! Chat transcript, composer, and quick replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires DOM events to `ChatState`/`ComposerState` transitions and runs the
//! single outstanding `/chat` request. All decisions (re-entry guard,
//! placeholder, fallback text) live in the state modules; this component
//! only performs the round trip and the scroll/resize niceties.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::chat::{ChatState, SentAt, TranscriptEntry};
use crate::state::composer::{ComposerState, is_submit_key};
use crate::util::markup::{render_message, render_pending};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let composer = expect_context::<RwSignal<ComposerState>>();

    let endpoint = StoredValue::new(config.chat_endpoint.clone());
    let scroll_delay_ms = config.scroll_delay_ms;
    let max_height = config.composer_max_height_px;
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    // Deferred scroll-to-bottom whenever the transcript changes.
    Effect::new(move || {
        let _ = chat.with(|c| c.transcript.len());

        #[cfg(feature = "csr")]
        {
            gloo_timers::callback::Timeout::new(scroll_delay_ms, move || {
                if let Some(el) = messages_ref.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = scroll_delay_ms;
        }
    });

    let resize_input = move || {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = input_ref.get_untracked() {
                let style = el.style();
                let _ = style.set_property("height", "auto");
                let height = crate::state::composer::composer_height(el.scroll_height(), max_height);
                let _ = style.set_property("height", &format!("{height}px"));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input_ref, max_height);
        }
    };

    let do_send = move || {
        let mut outbound = None;
        composer.update(|draft| {
            chat.update(|session| outbound = session.begin_send(draft, SentAt::now()));
        });
        let Some(message) = outbound else {
            return;
        };
        resize_input();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let endpoint = endpoint.get_value();
            let outcome = crate::net::api::send_chat_message(&endpoint, &message).await;
            composer.update(|draft| {
                chat.update(|session| session.finish_send(draft, outcome, SentAt::now()));
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (message, endpoint);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let quick_replies = config
        .quick_replies
        .iter()
        .copied()
        .map(|reply| {
            let on_pick = move |_| {
                composer.update(|c| c.apply_quick_reply(&reply));
                resize_input();
                #[cfg(feature = "csr")]
                {
                    if let Some(el) = input_ref.get_untracked() {
                        let _ = el.focus();
                    }
                }
            };
            view! {
                <button type="button" class="quick-action" on:click=on_pick>
                    {reply.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chat-panel">
            <div id="chat-box" class="chat-box" node_ref=messages_ref>
                <For
                    each=move || chat.get().transcript
                    key=TranscriptEntry::id
                    children=transcript_entry
                />
            </div>

            <div class="quick-actions">{quick_replies}</div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <textarea
                    id="message"
                    class="chat-input"
                    rows="1"
                    placeholder="Share what's on your mind..."
                    node_ref=input_ref
                    prop:value=move || composer.with(|c| c.draft.clone())
                    on:input=move |ev| {
                        composer.update(|c| c.set_draft(event_target_value(&ev)));
                        resize_input();
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button
                    id="send-btn"
                    class="send-btn"
                    type="submit"
                    disabled=move || !composer.with(ComposerState::send_enabled)
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn transcript_entry(entry: TranscriptEntry) -> impl IntoView {
    match entry {
        TranscriptEntry::Message(message) => {
            let rendered = render_message(&message);
            view! {
                <div class=rendered.css_class>
                    <div class="message-header">
                        <div class=rendered.avatar_class>{rendered.avatar}</div>
                        <span>{rendered.display_name}</span>
                        <span>"\u{2022}"</span>
                        <span>{rendered.time_label}</span>
                    </div>
                    <div class="bubble" inner_html=rendered.body_html></div>
                </div>
            }
            .into_any()
        }
        TranscriptEntry::Pending { .. } => {
            let rendered = render_pending();
            view! {
                <div class=rendered.css_class id="typing-indicator">
                    <div class="message-header">
                        <div class=rendered.avatar_class>{rendered.avatar}</div>
                        <span>{rendered.display_name}</span>
                        <span>"\u{2022}"</span>
                        <span>{rendered.time_label}</span>
                    </div>
                    <div class="typing-indicator">
                        <span>{rendered.body_html}</span>
                        <div class="typing-dots">
                            <div class="dot"></div>
                            <div class="dot"></div>
                            <div class="dot"></div>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
