//! # alumnet
//!
//! Leptos + WASM browser client for the Alumnet membership network.
//!
//! Most of the crate is presentational screens. The part that carries the
//! design weight is the session & authorization core: the credential store
//! (`util::credential_store`), the session state machine (`state::session`),
//! the route guards (`components::guards`), and the bearer-stamped request
//! facility (`net::api`). Feature pages only ever talk to those four.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
