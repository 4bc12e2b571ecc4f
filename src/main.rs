mod app;
mod charts;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::LaunchDashApp;
use eframe::egui;

/// Fixed dataset location, read once at startup.
const DATA_PATH: &str = "data/launch_records.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = data::loader::load_file(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    log::info!(
        "Loaded {} launch records: sites {:?}, payload bounds {:?}",
        table.len(),
        table.sites,
        table.payload_bounds()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 900.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
