//! Browser front end for the game portal. Everything that touches the DOM is
//! gated to the wasm32 target; the pure game logic (catalog tables, tombala
//! card generation) compiles everywhere so it can be unit-tested natively.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod features;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
#[cfg(target_arch = "wasm32")]
pub mod routes;

pub mod catalog;
pub mod tombala;

/// Mounts the application. Called from the binary entry point.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    leptos::prelude::mount_to_body(app::App);
}
