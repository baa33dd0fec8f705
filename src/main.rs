mod app;
mod cli;
mod color;
mod data;
mod state;
mod stats;
mod ui;

use anyhow::{Context, Result, anyhow};
use app::CsvCompareApp;
use clap::Parser;
use cli::Cli;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Everything is loaded and validated before a window is opened.
    let dataset = data::loader::load_comparison(&cli.file1, &cli.file2)
        .context("could not prepare the comparison")?;

    let title = format!(
        "CSV Compare – {} vs {}",
        dataset.first.label, dataset.second.label
    );

    let app = CsvCompareApp::new(dataset).context("no columns to compare")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
