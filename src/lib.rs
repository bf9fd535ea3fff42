//! # saas-dashboard
//!
//! Leptos + WASM client for a mock SaaS analytics dashboard: public marketing
//! pages, sign-in/sign-up against a simulated credential service, and a
//! protected area guarded by the session state machine in [`state::auth`].
//!
//! Everything outside the `csr` feature is plain Rust and runs under native
//! unit tests; the feature adds the browser glue (storage, timers, mounting).

pub mod app;
pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
