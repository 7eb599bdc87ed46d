//! Vibe Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod planner;
mod store;
mod vibes;

use app::App;
use leptos::prelude::*;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();
    let log = rolling_logger::init(LoggerConfig::default());
    mount_to_body(move || view! { <App log=log.clone() /> });
}
