//! GUI module for the RentFlow dashboard
//!
//! The dashboard has a left navigation panel whose labels come from the
//! settings store, a central panel per tab (overview, tenants, whatsapp,
//! reports, settings) and a bottom strip with the footer line and the last
//! operation status. Protected actions are routed through the passcode gate;
//! its modal dialog is rendered on top of everything else.

pub mod app;
pub mod passcode;
pub mod tabs;
pub mod theme;

pub use app::RentFlowApp;
pub use passcode::{render_passcode_dialog, PasscodeDialogState};

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use crate::config::{Config, SettingsStore};

/// Run the dashboard GUI
pub fn run_gui(config_override: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_override.as_deref())?;
    let settings = SettingsStore::open_default();
    info!("Starting {} dashboard", settings.settings().app_name);

    let window_title = settings.settings().app_name.clone();
    let app = RentFlowApp::new(config, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(&window_title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
