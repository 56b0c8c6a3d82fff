//! Shared constants for grid composition
//!
//! This module centralizes magic numbers and constants used throughout
//! normalization and compositing.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Fallback page width in points when a page carries no usable box (US Letter)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Fallback page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Fallback page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Grid
// =============================================================================

/// Share of a cell an item may occupy along its limiting axis
pub const CELL_FILL_RATIO: f32 = 0.95;

/// Default number of rows per output page
pub const DEFAULT_ROWS: usize = 3;

/// Default number of columns per output page
pub const DEFAULT_COLS: usize = 2;

/// Largest accepted row or column count
pub const MAX_GRID_DIMENSION: usize = 99;

// =============================================================================
// Normalization
// =============================================================================

/// Resolution at which raster images are embedded as pages
pub const IMAGE_RESOLUTION_DPI: f32 = 300.0;

/// File extensions accepted as input (lowercase, without dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "tif", "tiff", "bmp"];

/// Maximum depth followed when resolving inherited page attributes
pub const MAX_PAGE_TREE_DEPTH: usize = 32;

// =============================================================================
// Preview
// =============================================================================

/// Scale factor applied to the 72 DPI page size when rasterizing the preview
pub const PREVIEW_SCALE: f32 = 0.5;
