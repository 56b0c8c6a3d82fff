pub mod merge;
pub mod preview;

use pdf_async_runtime::{PdfUpdate, UpdateSender};
use pdf_grid::ItemFailure;

/// Report an error to the UI and the error log
pub(crate) fn send_error(update_tx: &UpdateSender, message: String) {
    log::error!("{}", message);
    let _ = update_tx.send(PdfUpdate::Error { message });
}

/// Report an item that was skipped; it goes to the error log too
pub(crate) fn send_item_failure(update_tx: &UpdateSender, failure: &ItemFailure) {
    let message = failure.to_string();
    log::error!("{}", message);
    let _ = update_tx.send(PdfUpdate::Warning { message });
}

/// Report a merge that stopped early so the UI can allow another one
pub(crate) fn send_merge_failure(update_tx: &UpdateSender, message: String) {
    log::error!("{}", message);
    let _ = update_tx.send(PdfUpdate::MergeFailed { message });
}
