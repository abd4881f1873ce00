//! Bindery - Book Printing & Binding
//!
//! Landing page for a book printing and binding studio with a lead form that
//! hands enquiries off to WhatsApp, built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    crate::core::report_panics(crate::core::analytics::GtagAnalytics);
    leptos::mount::hydrate_body(App);
}
