//! Pixel Pets Frontend Entry Point

mod api;
mod app;
mod auth;
mod brand;
mod components;
mod confetti;
mod context;
mod konami;
mod lifecycle;
mod models;
mod mood;
mod notice;
mod pages;
mod store;
mod theme;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&format!("[MAIN] Pixel Pets UI, API at {}", api::api_base()).into());
    mount_to_body(App);
}
