//! Layout data types for grid composition
//!
//! These types represent the intermediate layout calculations between
//! the grid options and PDF rendering.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Uniform division of an output page into cells
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Number of columns in the grid
    pub cols: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Output page width in points
    pub page_width_pt: f32,
    /// Output page height in points
    pub page_height_pt: f32,
    /// Width of each cell in points
    pub cell_width_pt: f32,
    /// Height of each cell in points
    pub cell_height_pt: f32,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies inside this rectangle, allowing `tolerance` points of slack
    pub fn contains_rect(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// Visible area of an intermediate page in its own coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBox {
    /// The visible box (CropBox or MediaBox)
    pub bounds: Rect,
    /// Page rotation in degrees, normalized to 0, 90, 180 or 270
    pub rotation: i32,
}

impl ItemBox {
    pub fn new(bounds: Rect, rotation: i32) -> Self {
        Self {
            bounds,
            rotation: rotation.rem_euclid(360) / 90 * 90,
        }
    }

    /// Width and height as displayed, after applying rotation
    pub fn display_size(&self) -> (f32, f32) {
        match self.rotation {
            90 | 270 => (self.bounds.height, self.bounds.width),
            _ => (self.bounds.width, self.bounds.height),
        }
    }
}

/// Final placement of an item on an output page
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Index of the item in the input order
    pub item_index: usize,
    /// Cell the item was assigned to
    pub cell: Rect,
    /// Position and size of the scaled item in points
    pub content_rect: Rect,
    /// Scale factor applied to the item
    pub scale: f32,
}
