//! # icy-client
//!
//! Leptos + WASM frontend for ICY. A single root page verifies the persisted
//! session and switches between the Login, Register and Dashboard screens.
//! All account data comes from the external auth backend over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
