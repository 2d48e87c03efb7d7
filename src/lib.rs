//! # portal-guard
//!
//! WASM page guard for the storefront portal's authenticated pages. On
//! load it checks the locally stored session token, redirects visitors
//! without one to the login page, renders the identity line, wires the
//! logout control, and hides admin-only elements from non-admin roles.
//! It also exposes [`api::authorized_fetch`] for bearer-authorized calls
//! to the backend.
//!
//! The decision logic ([`session`], [`store`], the header merge in
//! [`api`]) is target-independent; only [`guard`] and the storage/network
//! glue require a browser.

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod guard;
pub mod session;
pub mod store;

/// Module entry point: sets up console logging and installs the guard.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    guard::install();
}
