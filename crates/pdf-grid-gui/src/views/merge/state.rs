use eframe::egui;
use pdf_async_runtime::{GridOptions, MergeStatistics};
use pdf_grid::constants::SUPPORTED_EXTENSIONS;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn title(self) -> &'static str {
        match self {
            NoticeKind::Info => "Information",
            NoticeKind::Warning => "Warning",
            NoticeKind::Error => "Error",
        }
    }
}

/// A message the user has to dismiss
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct MergeState {
    pub options: GridOptions,
    pub selected: HashSet<PathBuf>,
    pub stats: Option<MergeStatistics>,
    pub preview_texture: Option<egui::TextureHandle>,
    pub preview_item_count: usize,
    pub needs_regeneration: bool,
    pub preview_pending: bool,
    pub merging: bool,
    pub notices: VecDeque<Notice>,
}

impl Default for MergeState {
    fn default() -> Self {
        Self {
            options: GridOptions::default(),
            selected: HashSet::new(),
            stats: None,
            preview_texture: None,
            preview_item_count: 0,
            needs_regeneration: false,
            preview_pending: false,
            merging: false,
            notices: VecDeque::new(),
        }
    }
}

impl MergeState {
    /// Append supported files that are not in the list yet.
    ///
    /// Returns the number of files added.
    pub fn add_files(&mut self, paths: impl IntoIterator<Item = PathBuf>) -> usize {
        let mut added = 0;
        for path in paths {
            if is_supported_input(&path) && !self.options.input_files.contains(&path) {
                self.options.input_files.push(path);
                added += 1;
            }
        }

        if added > 0 {
            self.input_changed();
        }
        added
    }

    pub fn remove_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        let selected = std::mem::take(&mut self.selected);
        self.options
            .input_files
            .retain(|path| !selected.contains(path));
        self.input_changed();
    }

    pub fn remove_all(&mut self) {
        self.options.input_files.clear();
        self.selected.clear();
        self.input_changed();
    }

    /// Replace the layout with one loaded from a file
    pub fn apply_loaded(&mut self, options: GridOptions) {
        self.selected
            .retain(|path| options.input_files.contains(path));
        self.options = options;
        self.input_changed();
    }

    /// Mark the preview stale after the file list changed
    pub fn input_changed(&mut self) {
        if self.options.input_files.is_empty() {
            self.stats = None;
        }
        self.needs_regeneration = true;
    }

    pub fn push_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notices.push_back(Notice {
            kind,
            message: message.into(),
        });
    }

    /// A merge stopped early, so another one may be started
    pub fn merge_failed(&mut self, message: impl Into<String>) {
        self.merging = false;
        self.push_notice(NoticeKind::Error, message);
    }

    /// An error outside the merge path; a queued merge keeps running
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.preview_pending = false;
        self.push_notice(NoticeKind::Error, message);
    }

    /// Idle progress bar fill: full once files are selected
    pub fn idle_fill(&self) -> f32 {
        if self.options.input_files.is_empty() {
            0.0
        } else {
            1.0
        }
    }

    /// Progress bar text while nothing is running
    pub fn idle_text(&self) -> String {
        match self.options.input_files.len() {
            0 => "Waiting for files".to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        }
    }
}

/// Whether a path has one of the accepted input extensions
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
