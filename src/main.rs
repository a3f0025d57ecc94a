//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod format;
mod models;
mod page_state;
mod query;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));

    mount_to_body(move || view! { <App config=config.clone() /> });
}
