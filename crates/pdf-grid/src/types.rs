use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid layout: {0}")]
    Layout(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("PDF file has no pages")]
    EmptyPdf,
    #[error("No items could be processed")]
    NoItems,
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Page dimensions in points with orientation applied
    pub fn dimensions_pt(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_with_orientation(orientation);
        (crate::constants::mm_to_pt(w), crate::constants::mm_to_pt(h))
    }
}

/// How an input file is turned into an intermediate page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// First page of a PDF document
    Pdf,
    /// Raster image embedded as a full-bleed page
    Image,
}

impl ItemKind {
    /// Classify a path by extension. Anything that is not `.pdf` is treated as an image.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let is_pdf = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf { ItemKind::Pdf } else { ItemKind::Image }
    }
}

/// Statistics about a merge
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStatistics {
    /// Number of items to place
    pub items: usize,
    /// Cells per output page (rows * cols)
    pub items_per_page: usize,
    /// Number of output pages
    pub output_pages: usize,
    /// Unused cells on the last output page
    pub empty_cells: usize,
}

/// A single item that could not be normalized or placed
#[derive(Debug)]
pub struct ItemFailure {
    /// Position of the item in the input order
    pub item_index: usize,
    /// Source file of the item
    pub path: PathBuf,
    /// What went wrong
    pub error: GridError,
}

impl ItemFailure {
    /// File name for display, falling back to the full path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match ItemKind::from_path(&self.path) {
            ItemKind::Pdf => "PDF processing failed",
            ItemKind::Image => "Image conversion failed",
        };
        write!(f, "{} ({}): {}", action, self.file_name(), self.error)
    }
}
