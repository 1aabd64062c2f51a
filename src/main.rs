//! Todos Frontend Entry Point

mod models;
mod config;
mod api;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[CONFIG] {}, using defaults", e).into());
        AppConfig::default()
    });

    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[LOG] Logger already set: {}", e).into());
    }
    log::info!("Using todo API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
