//! Item normalization
//!
//! Every input file, whatever its format, is turned into a single-page
//! intermediate document before compositing:
//! - PDF inputs keep only their first page
//! - Raster images are flattened onto white and embedded at 300 DPI

mod pdf;
mod raster;

pub use pdf::first_page_document;
pub use raster::{flatten_onto_white, image_document, image_page_size};

use crate::render::{first_page_id, get_page_dimensions};
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// One input file converted to a single-page document
#[derive(Debug, Clone)]
pub struct NormalizedItem {
    /// Position of the item in the input order
    pub item_index: usize,
    /// Source file
    pub path: PathBuf,
    /// Single-page intermediate document
    pub document: Document,
}

impl NormalizedItem {
    /// Displayed page size in points
    pub fn dimensions(&self) -> Result<(f32, f32)> {
        let page_id = first_page_id(&self.document).ok_or(GridError::EmptyPdf)?;
        get_page_dimensions(&self.document, page_id)
    }
}

/// Result of normalizing a batch of inputs
#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    /// Successfully normalized items, in input order
    pub items: Vec<NormalizedItem>,
    /// Items that were skipped
    pub failures: Vec<ItemFailure>,
}

/// Convert raw file contents into a single-page document
pub fn normalize_bytes(kind: ItemKind, bytes: &[u8]) -> Result<Document> {
    match kind {
        ItemKind::Pdf => {
            let source = Document::load_mem(bytes)?;
            first_page_document(&source)
        }
        ItemKind::Image => image_document(bytes),
    }
}

/// Normalize a single input file
pub async fn normalize_item(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let kind = ItemKind::from_path(&path);
    let bytes = tokio::fs::read(&path).await?;
    tokio::task::spawn_blocking(move || normalize_bytes(kind, &bytes)).await?
}

/// Normalize every input in order, skipping the ones that fail.
///
/// `on_item` is called after each input with `(done, total)`.
pub async fn normalize_items<P, F>(paths: &[P], mut on_item: F) -> NormalizeOutcome
where
    P: AsRef<Path>,
    F: FnMut(usize, usize),
{
    let total = paths.len();
    let mut outcome = NormalizeOutcome::default();

    for (item_index, path) in paths.iter().enumerate() {
        let path = path.as_ref().to_path_buf();
        match normalize_item(&path).await {
            Ok(document) => {
                log::debug!("Normalized {}", path.display());
                outcome.items.push(NormalizedItem {
                    item_index,
                    path,
                    document,
                });
            }
            Err(error) => outcome.failures.push(ItemFailure {
                item_index,
                path,
                error,
            }),
        }
        on_item(item_index + 1, total);
    }

    outcome
}
