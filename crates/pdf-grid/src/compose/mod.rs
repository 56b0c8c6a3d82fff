//! Grid composition - placing normalized items onto output pages
//!
//! This module orchestrates the compositing step:
//! 1. Validate the layout and compute the output page size
//! 2. Split the items into page-sized chunks, row-major
//! 3. Render each chunk as one output page of Form XObjects
//! 4. Assemble the page tree

mod io;

pub use io::{load_pdf, pdf_bytes, save_pdf};

use crate::layout::{create_grid_layout, pages_needed};
use crate::normalize::NormalizedItem;
use crate::options::GridOptions;
use crate::render::{finish_page_tree, render_grid_page};
use crate::types::*;
use lopdf::Document;

/// A composed output document
#[derive(Debug)]
pub struct Composed {
    /// The output document
    pub document: Document,
    /// Number of output pages
    pub page_count: usize,
    /// Items that were left out; their cells are empty
    pub warnings: Vec<ItemFailure>,
}

/// Compose items onto grid pages on the blocking thread pool.
///
/// `on_item` is called after each item with `(done, total)`.
pub async fn compose<F>(
    items: Vec<NormalizedItem>,
    options: GridOptions,
    on_item: F,
) -> Result<Composed>
where
    F: FnMut(usize, usize) + Send + 'static,
{
    options.validate_layout()?;

    tokio::task::spawn_blocking(move || compose_sync(&items, &options, on_item)).await?
}

/// Compose items onto grid pages.
///
/// Items fill each page row by row from the top left; a new page starts
/// after `rows * cols` items. An item that cannot be placed is reported in
/// [`Composed::warnings`] and its cell stays empty.
pub fn compose_sync<F>(
    items: &[NormalizedItem],
    options: &GridOptions,
    mut on_item: F,
) -> Result<Composed>
where
    F: FnMut(usize, usize),
{
    options.validate_layout()?;

    if items.is_empty() {
        return Err(GridError::NoItems);
    }

    let (page_width, page_height) = options.page_size_pt();
    let grid = create_grid_layout(page_width, page_height, options.rows, options.cols)?;

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_ids = Vec::with_capacity(pages_needed(&grid, items.len()));
    let mut warnings = Vec::new();

    let total = items.len();
    let mut done = 0;

    for chunk in items.chunks(grid.cell_count()) {
        let chunk: Vec<&NormalizedItem> = chunk.iter().collect();
        let rendered = render_grid_page(&mut output, &chunk, &grid, pages_tree_id, || {
            done += 1;
            on_item(done, total);
        })?;

        page_ids.push(rendered.page_id);
        warnings.extend(rendered.failures);
    }

    finish_page_tree(&mut output, pages_tree_id, &page_ids);

    log::info!(
        "Composed {} items onto {} pages ({}x{} grid)",
        total,
        page_ids.len(),
        options.rows,
        options.cols
    );

    Ok(Composed {
        document: output,
        page_count: page_ids.len(),
        warnings,
    })
}
