//! Browser entry point: mounts the docs app into `<body>`.
#![recursion_limit = "256"]

use app::App;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }

    log::info!("mounting docs app");
    leptos::mount::mount_to_body(|| view! { <App /> });
}
