//! # mindmate-client
//!
//! Leptos + WASM interaction layer for the MindMate chat application:
//! theme toggle, chat composer/transcript, and the sign-up/sign-in form.
//!
//! Browser glue lives behind the `csr` feature; pages are served as static
//! shells by the chat server and the app mounts into `<body>`. Every state machine
//! (`state::*`) is plain Rust so it runs and tests without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install diagnostics and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
