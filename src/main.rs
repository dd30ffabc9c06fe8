mod app;
mod components;
mod config;
mod cookies;
mod error;
mod media;
mod navigation;
mod pages;
mod session;
mod session_context;

use leptos::prelude::*;

use app::App;
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = AppConfig::load();
    log::info!("Retrievify starting (API base {})", config.api_base());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
