//! Browser UI for the brand color checker.

pub mod app;
pub mod components;
pub mod hooks;
pub mod sampler;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(app::App);
}
