//! Grid layout calculation
//!
//! This module divides an output page into equal cells and maps item
//! indices onto them in row-major order.

use crate::types::{GridError, Result};

use super::{GridLayout, GridPosition, Rect};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create a grid layout dividing the page uniformly.
///
/// # Arguments
/// * `page_width_pt` - Output page width in points
/// * `page_height_pt` - Output page height in points
/// * `rows` - Number of rows (at least 1)
/// * `cols` - Number of columns (at least 1)
pub fn create_grid_layout(
    page_width_pt: f32,
    page_height_pt: f32,
    rows: usize,
    cols: usize,
) -> Result<GridLayout> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Layout(format!(
            "grid must have at least one row and one column (got {}x{})",
            rows, cols
        )));
    }

    if !(page_width_pt > 0.0 && page_height_pt > 0.0) {
        return Err(GridError::Layout(format!(
            "page size must be positive (got {}x{})",
            page_width_pt, page_height_pt
        )));
    }

    Ok(GridLayout {
        cols,
        rows,
        page_width_pt,
        page_height_pt,
        cell_width_pt: page_width_pt / cols as f32,
        cell_height_pt: page_height_pt / rows as f32,
    })
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Grid position of the `index`-th item on a page (row-major).
///
/// Indices past the last cell wrap around, matching rollover onto a new page.
pub fn grid_position(grid: &GridLayout, index: usize) -> GridPosition {
    let slot = index % grid.cell_count();
    GridPosition::new(slot / grid.cols, slot % grid.cols)
}

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top row, so the y coordinate is measured down from the
/// page top and then converted to PDF's bottom-left origin.
pub fn cell_bounds(grid: &GridLayout, pos: GridPosition) -> Rect {
    let cell_x = pos.col as f32 * grid.cell_width_pt;
    let cell_y = grid.page_height_pt - (pos.row + 1) as f32 * grid.cell_height_pt;

    Rect::new(cell_x, cell_y, grid.cell_width_pt, grid.cell_height_pt)
}

/// Number of output pages needed for `item_count` items
pub fn pages_needed(grid: &GridLayout, item_count: usize) -> usize {
    item_count.div_ceil(grid.cell_count())
}

// =============================================================================
// Tests
// =============================================================================
