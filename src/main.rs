//! TOWHOECR Frontend Entry Point

mod models;
mod catalog;
mod display;
mod toast;
mod forms;
mod routes;
mod config;
mod commands;
mod store;
mod context;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = AppConfig::load();
    match rolling_logger::init(config.log_capacity, config.log_level()) {
        Ok(logger) => log::info!("starting {} (log level {})", config.brand, logger.level()),
        Err(e) => web_sys::console::error_1(&format!("logger init failed: {}", e).into()),
    }
    if let Some(warning) = warning {
        log::warn!("{}", warning);
    }

    mount_to_body(move || view! { <App config=config /> });
}
