use pdf_async_runtime::{GridOptions, PdfUpdate, UpdateSender};
use pdf_grid::{
    ItemFailure, NormalizedItem, calculate_statistics, generate_preview, normalize_item,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{send_error, send_item_failure};

/// Normalized inputs kept between previews so unchanged files are not decoded again
#[derive(Default)]
pub struct ItemCache {
    entries: HashMap<PathBuf, CachedItem>,
    /// Files already reported as failing, with the modification time seen then
    reported: HashMap<PathBuf, Option<SystemTime>>,
}

struct CachedItem {
    /// Modification time when the file was normalized
    modified: Option<SystemTime>,
    document: lopdf::Document,
}

/// Items for one preview page
pub struct PreviewItems {
    pub items: Vec<NormalizedItem>,
    /// Failures not reported by an earlier preview of the same file version
    pub new_failures: Vec<ItemFailure>,
}

impl ItemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize inputs in order until `limit` items succeeded.
    ///
    /// Items that fail are skipped, exactly as a merge would. A file that
    /// keeps failing is only returned in `new_failures` once per version.
    pub async fn first_items<F>(
        &mut self,
        paths: &[PathBuf],
        limit: usize,
        mut on_progress: F,
    ) -> PreviewItems
    where
        F: FnMut(usize, usize),
    {
        let total = limit.min(paths.len());
        let mut items = Vec::with_capacity(total);
        let mut new_failures = Vec::new();

        for (item_index, path) in paths.iter().enumerate() {
            if items.len() >= limit {
                break;
            }

            let modified = modified_time(path).await;
            match self.get_or_normalize(path, modified).await {
                Ok(document) => {
                    self.reported.remove(path);
                    items.push(NormalizedItem {
                        item_index,
                        path: path.clone(),
                        document,
                    });
                }
                Err(error) if self.reported.get(path) == Some(&modified) => {
                    log::debug!("Preview skips {}: {}", path.display(), error);
                }
                Err(error) => {
                    self.reported.insert(path.clone(), modified);
                    new_failures.push(ItemFailure {
                        item_index,
                        path: path.clone(),
                        error,
                    });
                }
            }

            on_progress(items.len(), total);
        }

        // Forget files that are no longer in the list
        self.entries.retain(|path, _| paths.contains(path));
        self.reported.retain(|path, _| paths.contains(path));

        PreviewItems {
            items,
            new_failures,
        }
    }

    async fn get_or_normalize(
        &mut self,
        path: &Path,
        modified: Option<SystemTime>,
    ) -> pdf_grid::Result<lopdf::Document> {
        if let Some(cached) = self.entries.get(path) {
            if cached.modified == modified {
                log::debug!("Using cached item {}", path.display());
                return Ok(cached.document.clone());
            }
        }

        let document = normalize_item(path).await?;
        self.entries.insert(
            path.to_path_buf(),
            CachedItem {
                modified,
                document: document.clone(),
            },
        );
        Ok(document)
    }
}

async fn modified_time(path: &Path) -> Option<SystemTime> {
    tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|meta| meta.modified().ok())
}

/// Compose the first output page and rasterize it for display
pub async fn handle_generate_preview(
    options: GridOptions,
    cache: &mut ItemCache,
    update_tx: &UpdateSender,
) {
    if options.input_files.is_empty() {
        let _ = update_tx.send(PdfUpdate::PreviewCleared);
        return;
    }

    if let Err(e) = options.validate_layout() {
        send_error(update_tx, format!("Invalid layout: {}", e));
        return;
    }

    if let Ok(stats) = calculate_statistics(options.input_files.len(), &options) {
        let _ = update_tx.send(PdfUpdate::StatsCalculated { stats });
    }

    let preview = cache
        .first_items(&options.input_files, options.items_per_page(), |done, total| {
            let _ = update_tx.send(PdfUpdate::Progress {
                operation: format!("Preparing preview {} of {}", done, total),
                current: done,
                total,
            });
        })
        .await;

    for failure in &preview.new_failures {
        send_item_failure(update_tx, failure);
    }

    let items = preview.items;
    if items.is_empty() {
        let _ = update_tx.send(PdfUpdate::PreviewCleared);
        return;
    }

    let item_count = items.len();
    let composed = match generate_preview(&items, &options).await {
        Ok(composed) => composed,
        Err(e) => {
            send_error(update_tx, format!("Failed to generate preview: {}", e));
            return;
        }
    };

    render(composed.document, item_count, update_tx).await;
}

#[cfg(feature = "preview")]
async fn render(mut document: lopdf::Document, item_count: usize, update_tx: &UpdateSender) {
    use pdf_grid::constants::PREVIEW_SCALE;

    let rendered = tokio::task::spawn_blocking(move || {
        let bytes = pdf_grid::pdf_bytes(&mut document).map_err(|e| e.to_string())?;
        crate::preview::render_first_page(&bytes, PREVIEW_SCALE).map_err(|e| e.to_string())
    })
    .await;

    match rendered {
        Ok(Ok(preview)) => {
            let _ = update_tx.send(PdfUpdate::PreviewRendered {
                width: preview.width,
                height: preview.height,
                rgba_data: preview.rgba_data,
                item_count,
            });
        }
        Ok(Err(e)) => send_error(update_tx, format!("Failed to render preview: {}", e)),
        Err(e) => send_error(update_tx, format!("Task join error: {}", e)),
    }
}

#[cfg(not(feature = "preview"))]
async fn render(_document: lopdf::Document, item_count: usize, update_tx: &UpdateSender) {
    log::info!(
        "Preview rendering is not available in this build ({} items composed)",
        item_count
    );
    let _ = update_tx.send(PdfUpdate::PreviewCleared);
}
