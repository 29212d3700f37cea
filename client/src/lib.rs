//! # client
//!
//! Leptos + WASM front end for Receipt Desk.
//!
//! The crate owns the browser session: the [`state::session::SessionMachine`]
//! that tracks who is signed in, the two-backend token store it persists
//! bearer tokens through, the REST collaborator it talks to, and the route
//! guards that decide which pages a visitor may see. Receipt pages are
//! consumers of that contract and live outside this crate's core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
