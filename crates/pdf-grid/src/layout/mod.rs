//! Layout calculation modules for grid composition
//!
//! This module handles all the geometric calculations:
//! - Grid layout (cell dimensions, row-major cell order)
//! - Item placement (scale-to-fit, centering, transformation matrix)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
