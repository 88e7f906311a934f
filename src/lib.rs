#![allow(non_snake_case)]

pub mod api;
pub mod components;
pub mod config;
pub mod registry;
pub mod services;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!(
        "Starting SWAPI Client (backend {}, catalog {})",
        config.api_base_url,
        config.catalog_base_url
    );

    // Remove loading spinner
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
