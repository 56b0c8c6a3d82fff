#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
#[cfg(feature = "preview")]
mod preview;
mod ui_components;
mod views;
mod worker;

/// Error lines are appended here, relative to the working directory
const ERROR_LOG_FILE: &str = "pdf_merger_error.log";

/// Log entries kept in memory for the status bar
const MAX_LOG_ENTRIES: usize = 500;

fn main() -> anyhow::Result<()> {
    let logger = logger::AppLogger::new(MAX_LOG_ENTRIES).with_error_file(ERROR_LOG_FILE);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }
    logger::install_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_drag_and_drop(true)
            .with_title("PDF Grid Merger"),
        ..Default::default()
    };

    eframe::run_native(
        "PDF Grid Merger",
        options,
        Box::new(move |cc| Ok(Box::new(app::PdfGridApp::new(cc, tokio_handle, logger)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {e}"))?;

    Ok(())
}
