mod app;
mod assets;
mod config;
mod data;
mod state;
mod summary;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::ExplorerApp;
use config::DashboardConfig;
use data::loader::DatasetCache;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::parse();

    // A load failure is fatal: the window never opens on a partial dataset.
    let cache = DatasetCache::new(&config.data_path);
    let dataset = cache
        .get_or_load()
        .with_context(|| format!("loading {}", cache.path().display()))?;

    if dataset.is_empty() {
        log::warn!("{} contains no papers", cache.path().display());
    }

    let state = AppState::new(dataset, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cord-19 Research Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the chart PNGs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ExplorerApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
