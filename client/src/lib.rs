//! # client
//!
//! Leptos + WASM frontend for the Igate hosting storefront: marketing pages,
//! product catalog and checkout, the customer dashboard, and the admin
//! back-office.
//!
//! The crate renders on the server under the `ssr` feature and hydrates in the
//! browser under `hydrate`; only the hydrated build talks to the backend. The
//! session store, route guard, and SSO exchange live in `state` and `util` as
//! plain Rust so they are testable without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
