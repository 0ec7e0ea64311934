//! # storefront-ui
//!
//! Leptos + WASM presentation components for the storefront: product cards,
//! the admin product table, and the user account sidebar.
//!
//! Components take their data and callbacks from the embedding application.
//! Nothing here fetches, persists, or authenticates; interaction logic lives
//! in plain state types under [`state`] so it can be tested without a DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod types;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating storefront-ui");
    leptos::mount::hydrate_body(app::App);
}
