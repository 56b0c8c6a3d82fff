use pdf_async_runtime::{PdfCommand, PdfUpdate};
use tokio::sync::mpsc;

use crate::handlers;
use crate::handlers::preview::ItemCache;

/// Async worker task that processes PDF commands and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: mpsc::UnboundedSender<PdfUpdate>,
) {
    let mut item_cache = ItemCache::new();

    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut item_cache, &mut command_rx, &update_tx).await;
    }

    log::debug!("Worker stopped: command channel closed");
}

async fn process_command(
    cmd: PdfCommand,
    item_cache: &mut ItemCache,
    command_rx: &mut mpsc::UnboundedReceiver<PdfCommand>,
    update_tx: &mpsc::UnboundedSender<PdfUpdate>,
) {
    match cmd {
        PdfCommand::MergeGeneratePreview { mut options } => {
            // Drain any queued preview commands, keeping only the most recent
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let PdfCommand::MergeGeneratePreview {
                    options: new_options,
                } = next_cmd
                {
                    log::debug!("Discarding queued preview generation, using newer request");
                    options = new_options;
                } else {
                    // Can't put it back, so run it before the preview
                    Box::pin(process_command(next_cmd, item_cache, command_rx, update_tx)).await;
                }
            }

            handlers::preview::handle_generate_preview(options, item_cache, update_tx).await;
        }
        PdfCommand::MergeGenerate {
            options,
            output_path,
        } => {
            handlers::merge::handle_generate(options, output_path, update_tx).await;
        }
        PdfCommand::MergeSaveConfig { options, path } => {
            handlers::merge::handle_save_config(options, path, update_tx).await;
        }
        PdfCommand::MergeLoadConfig { path } => {
            handlers::merge::handle_load_config(path, update_tx).await;
        }
        PdfCommand::MergeCalculateStats { options } => {
            handlers::merge::handle_calculate_stats(options, update_tx).await;
        }
    }
}
