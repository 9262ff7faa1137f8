//! Buyback Admin Page
//!
//! Browser console for deploying a token-buyback contract through an
//! injected wallet provider and inspecting an existing deployment.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("buyback admin starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM module is up.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(loading) = document.get_element_by_id("page-loading") {
        if let Some(element) = loading.dyn_ref::<HtmlElement>() {
            element.class_list().add_1("hidden").ok();
        }
        loading
            .set_attribute("style", "display: none !important;")
            .ok();
    }
}
