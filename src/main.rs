//! Smart Inventory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod csv;
mod download;
mod error;
mod form;
mod inventory;
mod logging;
mod models;
mod preferences;
mod reports;
mod route;
mod store;
mod view_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::load();
    logging::init(config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}
