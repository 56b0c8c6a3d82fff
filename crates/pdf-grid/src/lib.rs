pub mod compose;
pub mod constants;
pub mod layout;
pub mod normalize;
mod options;
mod preview;
pub mod render;
mod stats;
mod types;

pub use compose::{Composed, compose, compose_sync, load_pdf, pdf_bytes, save_pdf};
pub use normalize::{NormalizeOutcome, NormalizedItem, normalize_item, normalize_items};
pub use options::*;
pub use preview::generate_preview;
pub use stats::calculate_statistics;
pub use types::*;
