//! Album Desktop Application
//!
//! Gallery and upload window for the event album.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod bootstrap_config;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Runtime .env values override the ones baked in at build time
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("album=debug")),
        )
        .init();

    tracing::info!("Starting album...");

    let window = WindowBuilder::new()
        .with_title("Event Album")
        .with_inner_size(LogicalSize::new(1100.0, 820.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
