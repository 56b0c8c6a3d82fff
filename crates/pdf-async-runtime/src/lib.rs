use std::path::PathBuf;

// Re-export types from the library crate
pub use pdf_grid::{GridOptions, MergeStatistics};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    /// Compose and rasterize the first output page
    MergeGeneratePreview {
        options: GridOptions,
    },
    /// Normalize, compose and save every input
    MergeGenerate {
        options: GridOptions,
        output_path: PathBuf,
    },
    MergeSaveConfig {
        options: GridOptions,
        path: PathBuf,
    },
    MergeLoadConfig {
        path: PathBuf,
    },
    MergeCalculateStats {
        options: GridOptions,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    MergeComplete {
        path: PathBuf,
        page_count: usize,
    },
    /// The merge stopped before any output was written
    MergeFailed {
        message: String,
    },
    PreviewRendered {
        width: usize,
        height: usize,
        rgba_data: Vec<u8>,
        item_count: usize,
    },
    /// Nothing to show, e.g. every file was removed
    PreviewCleared,
    ConfigSaved {
        path: PathBuf,
    },
    ConfigLoaded {
        options: GridOptions,
    },
    StatsCalculated {
        stats: MergeStatistics,
    },
    /// A single item was skipped; processing went on
    Warning {
        message: String,
    },
    Error {
        message: String,
    },
}

/// Sender half used by the worker to report back to the UI
pub type UpdateSender = tokio::sync::mpsc::UnboundedSender<PdfUpdate>;
