pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod order;
pub mod pages;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    leptos::mount_to_body(app::App);
}
