mod app;
mod color;
mod config;
mod data;
mod predict;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::PassingGradeApp;
use config::{DashboardConfig, CONFIG_FILE};
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load_or_default(Path::new(CONFIG_FILE))?;
    // Missing files are shown in the UI; anything else stops here.
    let state = AppState::startup(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Passing Grade Prediction",
        options,
        Box::new(move |_cc| Ok(Box::new(PassingGradeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
