//! # solutions2coding
//!
//! Leptos + WASM frontend for the Solutions2Coding blog.
//!
//! The article catalog, listing rules, bookmark and streak bookkeeping live in
//! the `articles` crate. This crate owns pages, components, reactive state,
//! and the browser adapters (localStorage, matchMedia, clipboard) that feed
//! them. Browser calls are gated behind the `csr` feature so the rest of the
//! crate builds and tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
