//! # linkleaf
//!
//! Leptos + WASM frontend for the Linkleaf link-in-bio service: marketing
//! pages, the authenticated dashboard (links, appearance, settings), the
//! public profile renderer, and the admin console.
//!
//! All persistence is delegated to a hosted backend spoken to over REST in
//! [`net`]; this crate holds no server-side state of its own.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod theme;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
