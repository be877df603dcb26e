//! RimAuto Mini App - Leptos frontend
//!
//! Telegram Mini App + web catalog for the RimAuto car import marketplace.
//! Pure CSR: the backend is an opaque REST API, all persistence lives there.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod platform;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages in the browser console instead of a silent trap
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("RimAuto Mini App starting");

    platform::telegram::ready();

    leptos::mount::mount_to_body(|| view! { <App/> });
}
