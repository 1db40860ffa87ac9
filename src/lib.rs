//! SoftSell - Software License Resale Landing Page
//!
//! A single-page marketing site for reselling unused software licenses, with a
//! validated contact form, a license upload card and a small canned-answer chat
//! assistant. Built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::hydrate_body(App);
}
