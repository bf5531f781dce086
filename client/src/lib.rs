//! # dashboard-client
//!
//! Leptos + WASM frontend for the admin dashboard.
//!
//! This crate contains pages, components, session/fetch state, and the REST
//! request layer. The root `admin-dashboard` binary renders it over SSR and the
//! `hydrate` entry point below takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
