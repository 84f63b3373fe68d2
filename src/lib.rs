//! # portal-client
//!
//! Leptos + WASM front-end for the customer blog portal. On load it runs a
//! session guard (including the one-time magic-link token exchange), then
//! lists the client's delivered blog posts with preview, copy, download,
//! and logout actions against the portal backend API.
//!
//! The backend (session issuance, post storage, rendering) is a separate
//! service; this crate only consumes its `/portal/api/*` endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log reporting and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
