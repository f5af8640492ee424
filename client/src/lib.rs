//! # client
//!
//! Leptos + WASM frontend slice of the expense-management application: the
//! signup page and the browser bindings for the shared `gateway` (fetch
//! transport, `localStorage` session, window navigation).

pub mod app;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: wire logging and mount the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
