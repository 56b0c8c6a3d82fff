//! Item placement within cells
//!
//! Items are scaled uniformly so that they fill at most `CELL_FILL_RATIO`
//! of the cell along the limiting axis, then centered in the cell.

use crate::constants::CELL_FILL_RATIO;

use super::{ItemBox, Placement, Rect};

/// Uniform scale that fits an item of the given size into the cell.
///
/// Returns `min(cell_w * 0.95 / item_w, cell_h * 0.95 / item_h)`; degenerate
/// item sizes yield a scale of zero so the item is drawn empty rather than
/// overflowing the cell.
pub fn fit_scale(cell: &Rect, item_width: f32, item_height: f32) -> f32 {
    if !(item_width > 0.0 && item_height > 0.0) {
        return 0.0;
    }

    let scale_x = cell.width * CELL_FILL_RATIO / item_width;
    let scale_y = cell.height * CELL_FILL_RATIO / item_height;
    scale_x.min(scale_y)
}

/// Scale an item to fit the cell and center it.
pub fn place_item(item_index: usize, cell: Rect, item_width: f32, item_height: f32) -> Placement {
    let scale = fit_scale(&cell, item_width, item_height);

    let scaled_width = item_width * scale;
    let scaled_height = item_height * scale;

    let content_rect = Rect::new(
        cell.x + (cell.width - scaled_width) / 2.0,
        cell.y + (cell.height - scaled_height) / 2.0,
        scaled_width,
        scaled_height,
    );

    Placement {
        item_index,
        cell,
        content_rect,
        scale,
    }
}

/// Transformation matrix `[a b c d e f]` mapping the item's own coordinate
/// space onto its placement on the output page.
///
/// The item's visible box origin is moved to zero, the page rotation is
/// applied (clockwise, as viewers display it), then the result is scaled
/// and translated into the content rect.
pub fn placement_matrix(placement: &Placement, item: &ItemBox) -> [f32; 6] {
    let w = item.bounds.width;
    let h = item.bounds.height;

    let (a, b, c, d, e, f) = match item.rotation {
        90 => (0.0, -1.0, 1.0, 0.0, 0.0, w),
        180 => (-1.0, 0.0, 0.0, -1.0, w, h),
        270 => (0.0, 1.0, -1.0, 0.0, h, 0.0),
        _ => (1.0, 0.0, 0.0, 1.0, 0.0, 0.0),
    };

    let x0 = item.bounds.x;
    let y0 = item.bounds.y;
    let s = placement.scale;

    [
        s * a,
        s * b,
        s * c,
        s * d,
        s * (e - (a * x0 + c * y0)) + placement.content_rect.x,
        s * (f - (b * x0 + d * y0)) + placement.content_rect.y,
    ]
}
