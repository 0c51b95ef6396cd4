//! # menu-cart
//!
//! Leptos + WASM shopping cart for a restaurant menu page.
//!
//! This crate contains the menu page and its components, the cart state and
//! its controller, and the local store that keeps the cart across reloads
//! (IndexedDB in the browser, an in-memory map elsewhere). Build with the
//! `csr` feature for the browser; native builds compile browser calls out so
//! the state, store, and text helpers can be tested with `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
