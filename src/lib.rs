pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

use leptos::prelude::*;

use app::App;
use config::AppConfig;
use logging::setup_logging;

/// Resolve configuration, install logging and mount the app on `<body>`.
pub fn run() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    setup_logging(config.log_level());

    if let Some(e) = config_error {
        log::warn!("Invalid configuration, using defaults: {e}");
    }
    log::info!("Starting newsdesk UI against {}", config.api_base_url());

    mount_to_body(move || view! { <App config=config /> });
}
