// Quote Canvas Application
// Main entry point

use anyhow::{anyhow, Result};
use quote_canvas::services::quotes::QuoteCatalog;
use quote_canvas::services::settings::SettingsService;
use quote_canvas::ui_egui::QuoteApp;
use std::path::PathBuf;

const QUOTES_ENV_VAR: &str = "QUOTE_CANVAS_QUOTES";

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Quote Canvas");

    let settings_service = SettingsService::at_default_location();
    let mut settings = settings_service.load_or_default();
    log::info!("Settings loaded from {}", settings_service.path().display());

    if let Some(path) = std::env::var_os(QUOTES_ENV_VAR) {
        log::info!("Quote dataset overridden by {}", QUOTES_ENV_VAR);
        settings.quotes_file = Some(PathBuf::from(path));
    }

    // An empty or unreadable dataset is fatal: there is nothing to show.
    let catalog = QuoteCatalog::from_settings(&settings).map_err(|e| {
        log::error!("Cannot start without quotes: {:#}", e);
        e
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quote Canvas")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Quote Canvas",
        options,
        Box::new(move |cc| Ok(Box::new(QuoteApp::new(cc, settings, catalog)))),
    )
    .map_err(|e| anyhow!("Failed to run Quote Canvas window: {}", e))
}
