//! # quiz-shell
//!
//! Leptos + WASM client shell for the quiz application: session state,
//! route gating, startup preloader, transient alerts, and history-aware
//! navigation. Content pages mount inside the shell.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
