use crate::constants::{DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIMENSION};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid merge configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    // Input, in placement order
    pub input_files: Vec<PathBuf>,

    // Grid
    pub rows: usize,
    pub cols: usize,

    // Output page
    pub orientation: Orientation,
    pub paper_size: PaperSize,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            orientation: Orientation::Portrait,
            paper_size: PaperSize::A4,
        }
    }
}

impl GridOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse layout: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize layout: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Number of cells on each output page
    pub fn items_per_page(&self) -> usize {
        self.rows * self.cols
    }

    /// Output page size in points
    pub fn page_size_pt(&self) -> (f32, f32) {
        self.paper_size.dimensions_pt(self.orientation)
    }

    /// Validate the grid dimensions and page size
    pub fn validate_layout(&self) -> Result<()> {
        if !(1..=MAX_GRID_DIMENSION).contains(&self.rows) {
            return Err(GridError::Config(format!(
                "Rows must be between 1 and {}",
                MAX_GRID_DIMENSION
            )));
        }

        if !(1..=MAX_GRID_DIMENSION).contains(&self.cols) {
            return Err(GridError::Config(format!(
                "Columns must be between 1 and {}",
                MAX_GRID_DIMENSION
            )));
        }

        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.paper_size
        {
            if !(width_mm > 0.0 && height_mm > 0.0) {
                return Err(GridError::Config(
                    "Custom paper size must be positive".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(GridError::Config("No input files specified".to_string()));
        }

        self.validate_layout()
    }
}
