use pdf_async_runtime::{GridOptions, PdfUpdate, UpdateSender};
use pdf_grid::{calculate_statistics, compose, normalize_items, save_pdf};
use std::path::PathBuf;

use super::{send_error, send_item_failure, send_merge_failure};

/// Normalize, compose and save every input file.
///
/// The first half of the progress bar covers normalization, the second
/// half compositing. Items that fail are reported as warnings and skipped.
pub async fn handle_generate(options: GridOptions, output_path: PathBuf, update_tx: &UpdateSender) {
    if options.input_files.is_empty() {
        send_merge_failure(update_tx, "Please add files first".to_string());
        return;
    }

    if let Err(e) = options.validate() {
        send_merge_failure(update_tx, format!("Invalid layout: {}", e));
        return;
    }

    let total = options.input_files.len();
    let _ = update_tx.send(PdfUpdate::Progress {
        operation: "Processing files".to_string(),
        current: 0,
        total: total * 2,
    });

    let outcome = normalize_items(&options.input_files, |done, count| {
        let _ = update_tx.send(PdfUpdate::Progress {
            operation: format!("Processing file {} of {}", done, count),
            current: done,
            total: count * 2,
        });
    })
    .await;

    for failure in &outcome.failures {
        send_item_failure(update_tx, failure);
    }

    if outcome.items.is_empty() {
        send_merge_failure(update_tx, "No files could be processed".to_string());
        return;
    }

    let progress_tx = update_tx.clone();
    let composed = match compose(outcome.items, options, move |done, _| {
        let _ = progress_tx.send(PdfUpdate::Progress {
            operation: "Compositing pages".to_string(),
            current: total + done,
            total: total * 2,
        });
    })
    .await
    {
        Ok(composed) => composed,
        Err(e) => {
            send_merge_failure(update_tx, format!("Failed to merge files: {}", e));
            return;
        }
    };

    for failure in &composed.warnings {
        send_item_failure(update_tx, failure);
    }

    let page_count = composed.page_count;
    if let Err(e) = save_pdf(composed.document, &output_path).await {
        send_merge_failure(update_tx, format!("Failed to save PDF: {}", e));
        return;
    }

    log::info!(
        "Merged {} files into {} pages: {}",
        total,
        page_count,
        output_path.display()
    );
    let _ = update_tx.send(PdfUpdate::MergeComplete {
        path: output_path,
        page_count,
    });
}

pub async fn handle_save_config(options: GridOptions, path: PathBuf, update_tx: &UpdateSender) {
    match options.save(&path).await {
        Ok(()) => {
            log::info!("Layout saved to {}", path.display());
            let _ = update_tx.send(PdfUpdate::ConfigSaved { path });
        }
        Err(e) => send_error(update_tx, format!("Failed to save layout: {}", e)),
    }
}

pub async fn handle_load_config(path: PathBuf, update_tx: &UpdateSender) {
    match GridOptions::load(&path).await {
        Ok(options) => {
            log::info!("Layout loaded from {}", path.display());
            let _ = update_tx.send(PdfUpdate::ConfigLoaded { options });
        }
        Err(e) => send_error(update_tx, format!("Failed to load layout: {}", e)),
    }
}

pub async fn handle_calculate_stats(options: GridOptions, update_tx: &UpdateSender) {
    if options.input_files.is_empty() {
        return;
    }

    match calculate_statistics(options.input_files.len(), &options) {
        Ok(stats) => {
            let _ = update_tx.send(PdfUpdate::StatsCalculated { stats });
        }
        Err(e) => log::warn!("Failed to calculate statistics: {}", e),
    }
}
