mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use app::AnalyzerApp;
use config::Cli;
use data::cache::DatasetCache;
use data::report::DashboardReport;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let inputs = cli.inputs();
    let mut cache = DatasetCache::new();

    if cli.summary {
        let dataset = cache
            .get_or_load(&cli.dataset)
            .with_context(|| format!("loading {}", cli.dataset.display()))?;
        let report = DashboardReport::build(&dataset, &inputs);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
        return Ok(());
    }

    let state = AppState::new(cache, cli.dataset, inputs);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Spotify Fun Analyzer",
        options,
        Box::new(move |_cc| Ok(Box::new(AnalyzerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
