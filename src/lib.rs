//! SOS Assistant sign-in/sign-up client.
//!
//! ARCHITECTURE
//! ============
//! `app` wires routing and shared context, `pages` hold route-level screens,
//! `components` reusable chrome, `state` the form controller and UI state,
//! `net` the external-collaborator seams, and `util` browser glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
